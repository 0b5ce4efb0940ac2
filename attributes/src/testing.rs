//! Shared schema for unit tests.

use crate::descriptor::{Descriptor, ScalarKind};
use crate::schema::{Attribute, Schema, SchemaBuilder};

pub(crate) fn fixture_schema() -> Schema {
    let mut builder = SchemaBuilder::new();
    builder
        .declare("Person", Attribute::new("name"))
        .unwrap()
        .declare("City", Attribute::new("name"))
        .unwrap()
        .declare("City", Attribute::new("mayor").with_type(Descriptor::nested("Person")))
        .unwrap()
        .declare("Country", Attribute::new("name"))
        .unwrap()
        .declare("Country", Attribute::new("cities").with_type(Descriptor::collection("City")))
        .unwrap()
        .declare("Item", Attribute::new("description").as_default())
        .unwrap()
        .declare("Item", Attribute::new("notes"))
        .unwrap()
        .declare("List", Attribute::new("items").with_type(Descriptor::collection("Item")))
        .unwrap()
        .declare("Shelf", Attribute::new("label"))
        .unwrap()
        .declare("Shelf", Attribute::new("top").with_type(Descriptor::nested("Item")))
        .unwrap()
        .declare("Apple", Attribute::new("picked_at").with_type(Descriptor::Temporal))
        .unwrap()
        .declare("Collection", Attribute::new("things").with_type(Descriptor::Opaque))
        .unwrap()
        .declare("House", Attribute::new("tenants").with_type(Descriptor::Opaque))
        .unwrap()
        .declare(
            "Reading",
            Attribute::new("value").with_type(Descriptor::Scalar(ScalarKind::Integer)),
        )
        .unwrap()
        .declare(
            "Reading",
            Attribute::new("label").with_type(Descriptor::Scalar(ScalarKind::Text)),
        )
        .unwrap()
        .declare(
            "Reading",
            Attribute::new("valid").with_type(Descriptor::Scalar(ScalarKind::Boolean)),
        )
        .unwrap()
        .declare("Category", Attribute::new("title").as_default())
        .unwrap()
        .declare(
            "Category",
            Attribute::new("children").with_type(Descriptor::collection("Category")),
        )
        .unwrap()
        .declare_type("Marker");
    builder.build()
}
