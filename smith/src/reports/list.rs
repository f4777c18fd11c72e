//! List command report data structures.

use super::output::{Output, Report};

/// Every discovered entity with its generated names.
#[derive(Debug, Default)]
pub struct ListReport {
    pub entities: Vec<EntityListing>,
}

#[derive(Debug)]
pub struct EntityListing {
    pub name: String,
    pub qualified_name: String,
    /// `(kind, qualified type name)` per artifact; empty when the entity failed.
    pub artifacts: Vec<(String, String)>,
    pub routes: Vec<RouteListing>,
}

#[derive(Debug)]
pub struct RouteListing {
    pub method: String,
    pub path: String,
    pub status: u16,
    pub handler: String,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entities.is_empty() {
            out.preformatted("No entities found");
            return;
        }

        for (i, entity) in self.entities.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!("{} ({})", entity.name, entity.qualified_name));

            if entity.artifacts.is_empty() {
                out.list_item("failed to generate; run `smith check` for details");
                continue;
            }
            for (kind, name) in &entity.artifacts {
                out.key_value_indented(kind, name);
            }
            for route in &entity.routes {
                out.list_item(&format!(
                    "{:<6} {} -> {} {}",
                    route.method, route.path, route.status, route.handler
                ));
            }
        }
    }
}
