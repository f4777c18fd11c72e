//! Test fixtures for generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::str::FromStr;

use springsmith_manifest::Manifest;

/// Parse a manifest, panicking on invalid fixtures.
pub fn manifest(src: &str) -> Manifest {
    Manifest::from_str(src).expect("Failed to parse test manifest")
}

/// Two related entities: `Employee` (with a self reference and a department)
/// and `Department` (with a to-many back reference).
pub fn hr_manifest() -> Manifest {
    manifest(
        r#"
[project]
name = "hr"

[[types]]
name = "Employee"
package = "com.acme.hr.model"
annotations = ["Entity"]

[[types.fields]]
name = "serialVersionUID"
type = "long"
modifiers = ["private", "static", "final"]

[[types.fields]]
name = "id"
type = "Long"
annotations = ["Id"]

[[types.fields]]
name = "name"
type = "String"

[[types.fields]]
name = "active"
type = "boolean"

[[types.fields]]
name = "department"
type = "Department"
annotations = ["ManyToOne"]

[[types.fields]]
name = "manager"
type = "Employee"
annotations = ["ManyToOne"]

[[types.fields]]
name = "mentor"
type = "Employee"
annotations = ["OneToOne"]

[[types]]
name = "Department"
package = "com.acme.hr.model"
annotations = ["Entity"]

[[types.fields]]
name = "code"
type = "String"
annotations = ["Id"]

[[types.fields]]
name = "title"
type = "String"

[[types.fields]]
name = "employees"
type = "java.util.List<Employee>"
annotations = ["OneToMany"]
"#,
    )
}

/// A single `Invoice` entity with a `Long` identifier.
pub fn invoice_manifest() -> Manifest {
    manifest(
        r#"
[project]
name = "billing"

[[types]]
name = "Invoice"
package = "com.acme.billing.model"
annotations = ["jakarta.persistence.Entity"]

[[types.fields]]
name = "id"
type = "Long"
annotations = ["jakarta.persistence.Id"]

[[types.fields]]
name = "total"
type = "java.math.BigDecimal"
"#,
    )
}

/// An entity without an identifier field.
pub fn note_manifest() -> Manifest {
    manifest(
        r#"
[project]
name = "notes"

[[types]]
name = "Note"
package = "app.model"
annotations = ["Entity"]

[[types.fields]]
name = "text"
type = "String"
"#,
    )
}

/// Three entities; the middle one carries conflicting relation markers.
pub fn batch_with_broken_middle() -> Manifest {
    manifest(
        r#"
[project]
name = "batch"

[[types]]
name = "Alpha"
package = "app.model"
annotations = ["Entity"]

[[types.fields]]
name = "id"
type = "Long"
annotations = ["Id"]

[[types]]
name = "Beta"
package = "app.model"
annotations = ["Entity"]

[[types.fields]]
name = "id"
type = "Long"
annotations = ["Id"]

[[types.fields]]
name = "alpha"
type = "Alpha"
annotations = ["ManyToOne", "OneToMany"]

[[types]]
name = "Gamma"
package = "app.model"
annotations = ["Entity"]

[[types.fields]]
name = "id"
type = "Long"
annotations = ["Id"]
"#,
    )
}
