//! Recursive serialization of permission records into Go composite literals.
//!
//! Each record type appends a `{ Field: value, ... },` fragment to an output
//! buffer that is threaded explicitly through the recursive calls. Field order
//! is fixed per record type so that identical input reproduces identical
//! output byte for byte. Layout is deliberately loose; gofmt owns the final
//! formatting of the generated file.

use crate::model::{Condition, Privilege, Resource, ResourceTypeRef, Service};

/// A record that can render itself as a Go composite literal.
pub trait GoLiteral {
    /// The Go struct type the literal instantiates, used for the element type
    /// of slice literals so that empty and populated slices declare the same
    /// type.
    fn go_type() -> &'static str;

    /// Append this record as `{ ... },` to the buffer.
    fn write_literal(&self, out: &mut String);
}

/// Escape a scraped value for embedding in a double-quoted Go string literal.
///
/// Backslashes and interior double quotes are escaped; newlines and other
/// control characters pass through unchanged, matching the scraped corpus
/// (no such characters appear in the upstream documentation tables).
fn push_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
}

fn push_string_field(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push_str(": \"");
    push_escaped(out, value);
    out.push_str("\",\n");
}

fn push_string_slice_field(out: &mut String, name: &str, values: &[String]) {
    out.push_str(name);
    out.push_str(": []string{");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('"');
        push_escaped(out, value);
        out.push('"');
    }
    out.push_str("},\n");
}

fn push_record_slice_field<T: GoLiteral>(out: &mut String, name: &str, records: &[T]) {
    out.push_str(name);
    out.push_str(": []");
    out.push_str(T::go_type());
    out.push('{');
    if !records.is_empty() {
        out.push('\n');
        for record in records {
            record.write_literal(out);
        }
    }
    out.push_str("},\n");
}

impl GoLiteral for Service {
    fn go_type() -> &'static str {
        "ParliamentService"
    }

    fn write_literal(&self, out: &mut String) {
        out.push_str("{\n");
        push_string_field(out, "ServiceName", &self.service_name);
        push_string_field(out, "Prefix", &self.prefix);
        push_record_slice_field(out, "Privileges", &self.privileges);
        push_record_slice_field(out, "Resources", &self.resources);
        push_record_slice_field(out, "Conditions", &self.conditions);
        out.push_str("},\n");
    }
}

impl GoLiteral for Privilege {
    fn go_type() -> &'static str {
        "ParliamentPrivilege"
    }

    fn write_literal(&self, out: &mut String) {
        out.push_str("{\n");
        push_string_field(out, "Privilege", &self.privilege);
        push_string_field(out, "AccessLevel", &self.access_level);
        push_string_field(out, "Description", &self.description);
        push_record_slice_field(out, "ResourceTypes", &self.resource_types);
        out.push_str("},\n");
    }
}

impl GoLiteral for ResourceTypeRef {
    fn go_type() -> &'static str {
        "ParliamentResourceType"
    }

    fn write_literal(&self, out: &mut String) {
        out.push_str("{\n");
        push_string_field(out, "ResourceType", &self.resource_type);
        push_string_slice_field(out, "ConditionKeys", &self.condition_keys);
        push_string_slice_field(out, "DependentActions", &self.dependent_actions);
        out.push_str("},\n");
    }
}

impl GoLiteral for Resource {
    fn go_type() -> &'static str {
        "ParliamentResource"
    }

    fn write_literal(&self, out: &mut String) {
        out.push_str("{\n");
        push_string_field(out, "Resource", &self.resource);
        push_string_field(out, "Arn", &self.arn);
        push_string_slice_field(out, "ConditionKeys", &self.condition_keys);
        out.push_str("},\n");
    }
}

impl GoLiteral for Condition {
    fn go_type() -> &'static str {
        "ParliamentCondition"
    }

    fn write_literal(&self, out: &mut String) {
        out.push_str("{\n");
        push_string_field(out, "Condition", &self.condition);
        push_string_field(out, "Description", &self.description);
        push_string_field(out, "Type", &self.condition_type);
        out.push_str("},\n");
    }
}
