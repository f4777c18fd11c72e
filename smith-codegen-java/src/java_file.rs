//! JavaFile abstraction for structured Java file generation.

use std::collections::HashMap;

use springsmith_codegen::generation::ImportCollector;
use springsmith_core::{last_segment, strip_last_segment};
use springsmith_ir::TypeRef;

/// Implicitly imported by every compilation unit.
const JAVA_LANG: &str = "java.lang";

/// A Java compilation unit: package, imports and body.
///
/// Each simple name in a file stands for exactly one type. The first type to
/// claim a simple name is imported and written by its simple name; later
/// types sharing that simple name are written fully qualified and not
/// imported. Imports from `java.lang` and from the file's own package are
/// dropped when rendering.
///
/// # Example
///
/// ```
/// use springsmith_codegen_java::JavaFile;
/// use springsmith_ir::TypeRef;
///
/// let mut file = JavaFile::new("com.acme.dto").import("java.util.List");
/// let created = file.type_name(&TypeRef::named("java.util.Date"));
/// let day = file.type_name(&TypeRef::named("java.sql.Date"));
///
/// assert_eq!(created, "Date");
/// assert_eq!(day, "java.sql.Date");
/// assert_eq!(file.imports(), vec!["java.util.Date", "java.util.List"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JavaFile {
    package: String,
    imports: ImportCollector,
    /// Simple name -> the type it stands for in this file.
    names: HashMap<String, String>,
    body: String,
}

impl JavaFile {
    /// Create a file in `package`. An empty package is the default package.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Reserve the simple name of a type declared by this file.
    pub fn declare(mut self, type_name: &str) -> Self {
        let qualified = if self.package.is_empty() {
            type_name.to_string()
        } else {
            format!("{}.{}", self.package, type_name)
        };
        self.bind(&qualified);
        self
    }

    /// Import a qualified name the body refers to by its simple name.
    ///
    /// Call this before [`JavaFile::type_name`] so fixed framework names win
    /// their simple names.
    pub fn import(mut self, qualified_name: &str) -> Self {
        self.bind(qualified_name);
        self
    }

    /// Render `ty` for use in this file, importing what it refers to.
    pub fn type_name(&mut self, ty: &TypeRef) -> String {
        ty.display_with(&mut |name| {
            if self.bind(name) {
                last_segment(name).to_string()
            } else if strip_last_segment(name).is_some() {
                name.to_string()
            } else {
                format!("{}.{}", JAVA_LANG, name)
            }
        })
    }

    /// Set the body (the type declaration).
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Import statements as they will be rendered, sorted.
    pub fn imports(&self) -> Vec<String> {
        let mut imports = self.imports.clone();
        imports.retain_modules(|module| module != JAVA_LANG && module != self.package);
        imports.qualified_names()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.package.is_empty() {
            out.push_str(&format!("package {};\n\n", self.package));
        }

        let imports = self.imports();
        if !imports.is_empty() {
            for import in &imports {
                out.push_str(&format!("import {};\n", import));
            }
            out.push('\n');
        }

        out.push_str(&self.body);
        out
    }

    /// Claim the simple name of `name`. Returns false when another type
    /// already holds it.
    fn bind(&mut self, name: &str) -> bool {
        let simple = last_segment(name);
        let canonical = match strip_last_segment(name) {
            Some(JAVA_LANG) | None => simple,
            Some(_) => name,
        };

        match self.names.get(simple) {
            Some(bound) => bound == canonical,
            None => {
                self.names.insert(simple.to_string(), canonical.to_string());
                self.imports.add_qualified(name);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_package_imports_dropped() {
        let mut file = JavaFile::new("com.acme.hr.dto");
        file.type_name(&TypeRef::named("com.acme.hr.dto.DepartmentDTO"));
        file.type_name(&TypeRef::named("com.acme.hr.model.Department"));

        assert_eq!(file.imports(), vec!["com.acme.hr.model.Department"]);
    }

    #[test]
    fn test_type_name_walks_arguments() {
        let ty = TypeRef::parse("java.util.Map<java.lang.String, com.acme.Order>").unwrap();
        let mut file = JavaFile::new("com.acme.dto");

        assert_eq!(file.type_name(&ty), "Map<String, Order>");
        assert_eq!(file.imports(), vec!["com.acme.Order", "java.util.Map"]);
    }

    #[test]
    fn test_clashing_simple_names_are_qualified() {
        let mut file = JavaFile::new("com.acme.dto");
        let created = file.type_name(&TypeRef::named("java.util.Date"));
        let day = file.type_name(&TypeRef::named("java.sql.Date"));
        let again = file.type_name(&TypeRef::named("java.util.Date"));

        assert_eq!((created.as_str(), day.as_str()), ("Date", "java.sql.Date"));
        assert_eq!(again, "Date");
        assert_eq!(file.imports(), vec!["java.util.Date"]);
    }

    #[test]
    fn test_framework_imports_win_simple_names() {
        let mut file = JavaFile::new("app.services").import("org.springframework.stereotype.Service");
        let entity = file.type_name(&TypeRef::named("app.model.Service"));

        assert_eq!(entity, "app.model.Service");
        assert_eq!(file.imports(), vec!["org.springframework.stereotype.Service"]);
    }

    #[test]
    fn test_java_lang_names_share_one_binding() {
        let mut file = JavaFile::new("app.dtos");
        assert_eq!(file.type_name(&TypeRef::named("String")), "String");
        assert_eq!(file.type_name(&TypeRef::named("java.lang.String")), "String");
        assert_eq!(file.type_name(&TypeRef::named("app.model.String")), "app.model.String");
        assert!(file.imports().is_empty());
    }

    #[test]
    fn test_declared_type_shadows_imports() {
        let mut file = JavaFile::new("app.dtos").declare("EventDTO");
        assert_eq!(file.type_name(&TypeRef::named("app.legacy.EventDTO")), "app.legacy.EventDTO");
    }

    #[test]
    fn test_default_package_has_no_package_line() {
        let file = JavaFile::new("").body("class A {\n}\n").render();
        assert_eq!(file, "class A {\n}\n");
    }
}
