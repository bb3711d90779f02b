//! JSON Schema of the trace file format.
//!
//! The schema is generated from the [`Trace`] types with [`schemars`], so a
//! file that validates against it always deserializes into the data model.

use schemars::schema_for;
use serde_json::Value;

use crate::trace::Trace;

/// Returns the JSON Schema (draft 2020-12) every trace file must satisfy.
pub fn trace_schema() -> Value {
    schema_for!(Trace).to_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_root_fields() {
        let schema = trace_schema();
        let required = schema["required"].as_array().unwrap();

        assert!(required.iter().any(|field| field == "declarations"));
        assert!(required.iter().any(|field| field == "sub_filenames"));
    }

    #[test]
    fn test_schema_defines_recursive_event() {
        let schema = trace_schema();
        assert!(schema["$defs"]["Event"].is_object());
        assert!(schema["$defs"]["PrintingVariants"].is_object());
    }
}
