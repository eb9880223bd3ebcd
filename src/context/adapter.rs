//! Reading and writing the field store on a [`Context`].

use crate::context::carrier::Context;
use crate::fields::{FieldValue, Fields};

/// Private key type for the field store slot.
struct FieldsKey;

/// Fields attached to `ctx`, or an empty set if none were ever attached.
pub fn fields_of(ctx: &Context) -> Fields {
    ctx.value::<FieldsKey, Fields>()
        .cloned()
        .unwrap_or_default()
}

/// Derive a context whose field store additionally holds `key` → `value`.
///
/// `ctx` and every context derived from it before this call keep reporting
/// their own fields.
pub fn with_field(ctx: &Context, key: impl Into<String>, value: impl Into<FieldValue>) -> Context {
    let fields = fields_of(ctx).with(key, value);
    ctx.with_value::<FieldsKey, _>(fields)
}

/// Derive a context whose field store is overlaid with `fields`.
pub fn with_fields(ctx: &Context, fields: &Fields) -> Context {
    let merged = fields_of(ctx).merge(fields);
    ctx.with_value::<FieldsKey, _>(merged)
}
