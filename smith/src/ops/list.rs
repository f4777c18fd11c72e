//! List operation - entities, artifact names and routes.

use eyre::{Context, Result};
use springsmith_codegen::pipeline::Pipeline;
use springsmith_manifest::Manifest;

use crate::reports::{EntityListing, ListReport, RouteListing};

/// Execute the list operation.
pub fn list(manifest: &Manifest) -> Result<ListReport> {
    let ctx = Pipeline::new()
        .run(manifest.clone())
        .wrap_err("Pipeline failed")?;

    let entities = ctx
        .entities
        .iter()
        .map(|entity| {
            let artifacts = entity
                .artifacts
                .iter()
                .map(|a| (a.spec.kind().to_string(), a.spec.name().qualified_name()))
                .collect();

            let routes = entity
                .artifacts
                .iter()
                .filter_map(|a| a.spec.as_controller())
                .flat_map(|controller| {
                    controller.routes.iter().map(|route| RouteListing {
                        method: route.method.to_string(),
                        path: route.full_path(&controller.base_path),
                        status: route.status,
                        handler: route.handler.clone(),
                    })
                })
                .collect();

            EntityListing {
                name: entity.name.clone(),
                qualified_name: entity.qualified_name.clone(),
                artifacts,
                routes,
            }
        })
        .collect();

    Ok(ListReport { entities })
}

#[cfg(test)]
mod tests {
    use springsmith_codegen::testing;

    use super::*;
    use crate::reports::{BufferOutput, Report};

    #[test]
    fn test_list_routes() {
        let report = list(&testing::hr_manifest()).unwrap();
        let department = &report.entities[1];

        assert_eq!(department.name, "Department");
        assert_eq!(department.artifacts.len(), 5);
        assert_eq!(department.routes.len(), 5);
        assert_eq!(department.routes[0].path, "/api/departments");
        assert_eq!(department.routes[1].path, "/api/departments/{code}");
        assert_eq!(department.routes[2].status, 201);
        assert_eq!(department.routes[4].method, "DELETE");
        assert_eq!(department.routes[4].status, 204);
    }

    #[test]
    fn test_list_renders_failed_entities() {
        let report = list(&testing::batch_with_broken_middle()).unwrap();

        let mut out = BufferOutput::default();
        report.render(&mut out);
        let text = out.text();
        assert!(text.contains("Beta (app.model.Beta):"));
        assert!(text.contains("failed to generate"));
        assert!(text.contains("  controller: app.controllers.AlphaController"));
    }
}
