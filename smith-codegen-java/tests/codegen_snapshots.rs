//! Snapshot tests for Java code generation.
//!
//! These tests verify that the generated Java sources match expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use springsmith_codegen::{pipeline::Pipeline, testing};
use springsmith_codegen_java::{ArtifactSink, Generator};
use springsmith_manifest::Manifest;
use tempfile::TempDir;

/// Run the pipeline and return preview files sorted by path for deterministic snapshots.
fn generate_files(manifest: Manifest) -> Vec<(String, String)> {
    let ctx = Pipeline::new()
        .run(manifest)
        .expect("Failed to run pipeline");
    let files = Generator::from_context(&ctx).preview();

    let mut result: Vec<(String, String)> =
        files.into_iter().map(|f| (f.path, f.content)).collect();
    result.sort_by(|a, b| a.0.cmp(&b.0));
    result
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_one_file_per_artifact() {
    let files = generate_files(testing::hr_manifest());
    let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();

    assert_eq!(
        paths,
        vec![
            "src/main/java/com/acme/hr/controllers/DepartmentController.java",
            "src/main/java/com/acme/hr/controllers/EmployeeController.java",
            "src/main/java/com/acme/hr/dtos/DepartmentDTO.java",
            "src/main/java/com/acme/hr/dtos/EmployeeDTO.java",
            "src/main/java/com/acme/hr/mappers/DepartmentMapper.java",
            "src/main/java/com/acme/hr/mappers/EmployeeMapper.java",
            "src/main/java/com/acme/hr/repositories/DepartmentRepository.java",
            "src/main/java/com/acme/hr/repositories/EmployeeRepository.java",
            "src/main/java/com/acme/hr/services/DepartmentService.java",
            "src/main/java/com/acme/hr/services/EmployeeService.java",
        ]
    );
    assert!(files.iter().all(|(_, c)| c.starts_with("// Generated by smith. Do not edit.\n")));
}

#[test]
fn test_invoice_dto() {
    let files = generate_files(testing::invoice_manifest());
    let dto = get_file(&files, "src/main/java/com/acme/billing/dtos/InvoiceDTO.java")
        .expect("InvoiceDTO.java not found");
    insta::assert_snapshot!("invoice_dto", dto);
}

#[test]
fn test_invoice_repository() {
    let files = generate_files(testing::invoice_manifest());
    let repository = get_file(
        &files,
        "src/main/java/com/acme/billing/repositories/InvoiceRepository.java",
    )
    .expect("InvoiceRepository.java not found");
    insta::assert_snapshot!("invoice_repository", repository);
}

#[test]
fn test_degraded_repository() {
    let files = generate_files(testing::note_manifest());
    let repository = get_file(&files, "src/main/java/app/repositories/NoteRepository.java")
        .expect("NoteRepository.java not found");
    insta::assert_snapshot!("note_repository", repository);
}

#[test]
fn test_degraded_service() {
    let files = generate_files(testing::note_manifest());
    let service = get_file(&files, "src/main/java/app/services/NoteService.java")
        .expect("NoteService.java not found");
    insta::assert_snapshot!("note_service", service);
}

#[test]
fn test_dto_unwraps_relations() {
    let files = generate_files(testing::hr_manifest());
    let dto = get_file(&files, "src/main/java/com/acme/hr/dtos/EmployeeDTO.java")
        .expect("EmployeeDTO.java not found");

    assert!(dto.contains("private String departmentId;"));
    assert!(dto.contains("private Long managerId;"));
    assert!(dto.contains("private Long mentorId;"));
    assert!(dto.contains("public boolean isActive() {"));
    assert!(!dto.contains("serialVersionUID"));
    assert!(!dto.contains("import com.acme.hr.model"));

    let department = get_file(&files, "src/main/java/com/acme/hr/dtos/DepartmentDTO.java")
        .expect("DepartmentDTO.java not found");
    assert!(!department.contains("employees"));
    assert!(!department.contains("List"));
}

#[test]
fn test_mapper_rules_and_helpers() {
    let files = generate_files(testing::hr_manifest());
    let mapper = get_file(&files, "src/main/java/com/acme/hr/mappers/EmployeeMapper.java")
        .expect("EmployeeMapper.java not found");

    assert!(mapper.contains(
        "@Mapper(componentModel = \"spring\", unmappedTargetPolicy = ReportingPolicy.IGNORE)"
    ));
    assert!(mapper.contains("@Mapping(source = \"department.code\", target = \"departmentId\")"));
    assert!(mapper.contains("@Mapping(source = \"managerId\", target = \"manager\")"));
    assert!(mapper.contains("EmployeeDTO toEmployeeDTO(Employee employee);"));
    assert!(mapper.contains("Employee toEmployee(EmployeeDTO employeeDTO);"));
    assert!(mapper.contains("@Mapping(target = \"id\", ignore = true)"));
    assert!(mapper.contains(
        "void updateEmployee(EmployeeDTO employeeDTO, @MappingTarget Employee employee);"
    ));
    assert!(mapper.contains("default Department mapDepartmentFromId(String id) {"));
    assert!(mapper.contains("department.setCode(id);"));
    assert_eq!(mapper.matches("default Employee mapEmployeeFromId(Long id)").count(), 1);
    assert!(mapper.contains("import com.acme.hr.dtos.EmployeeDTO;"));
    assert!(mapper.contains("import org.mapstruct.MappingTarget;"));
}

#[test]
fn test_service_operations() {
    let files = generate_files(testing::hr_manifest());
    let service = get_file(&files, "src/main/java/com/acme/hr/services/EmployeeService.java")
        .expect("EmployeeService.java not found");

    assert!(service.contains("@Service"));
    assert!(service.contains(
        "public EmployeeService(EmployeeRepository employeeRepository, EmployeeMapper employeeMapper) {"
    ));
    assert!(service.contains("public List<EmployeeDTO> findAll() {"));
    assert!(service.contains("public EmployeeDTO findById(Long id) {"));
    assert!(service.contains("public EmployeeDTO update(Long id, EmployeeDTO employeeDTO) {"));
    assert!(service.contains("employeeMapper.updateEmployee(employeeDTO, employee);"));
    assert!(service.contains("if (!employeeRepository.existsById(id)) {"));
    assert!(service.contains("employeeRepository.deleteById(id);"));
    assert!(service.contains("import jakarta.persistence.EntityNotFoundException;"));
}

#[test]
fn test_service_uses_identifier_name() {
    let files = generate_files(testing::hr_manifest());
    let service = get_file(&files, "src/main/java/com/acme/hr/services/DepartmentService.java")
        .expect("DepartmentService.java not found");

    assert!(service.contains("public DepartmentDTO findById(String code) {"));
    assert!(service.contains("\"Department not found with code \" + code"));
}

#[test]
fn test_controller_routes() {
    let files = generate_files(testing::hr_manifest());
    let controller = get_file(
        &files,
        "src/main/java/com/acme/hr/controllers/EmployeeController.java",
    )
    .expect("EmployeeController.java not found");

    assert!(controller.contains("@RequestMapping(\"/api/employees\")"));
    assert!(controller.contains("public ResponseEntity<List<EmployeeDTO>> getAllEmployees() {"));
    assert!(controller.contains("@GetMapping(\"/{id}\")"));
    assert!(controller.contains(
        "public ResponseEntity<EmployeeDTO> getEmployeeById(@PathVariable Long id) {"
    ));
    assert!(controller.contains("return ResponseEntity.ok(employeeService.findById(id));"));
    assert!(controller.contains(
        "return ResponseEntity.status(HttpStatus.CREATED).body(employeeService.save(employeeDTO));"
    ));
    assert!(controller.contains("@PutMapping(\"/{id}\")"));
    assert!(controller.contains("return ResponseEntity.status(HttpStatus.NO_CONTENT).build();"));
    assert!(controller.contains("@ExceptionHandler(EntityNotFoundException.class)"));
    assert!(controller.contains("return ResponseEntity.status(HttpStatus.NOT_FOUND).body(ex.getMessage());"));
}

#[test]
fn test_javax_persistence() {
    let mut manifest = testing::hr_manifest();
    manifest.generator.persistence = springsmith_manifest::Persistence::Javax;
    let files = generate_files(manifest);

    let controller = get_file(
        &files,
        "src/main/java/com/acme/hr/controllers/DepartmentController.java",
    )
    .expect("DepartmentController.java not found");
    assert!(controller.contains("import javax.persistence.EntityNotFoundException;"));
    assert!(!controller.contains("jakarta"));
}

#[test]
fn test_failed_entity_emits_nothing() {
    let files = generate_files(testing::batch_with_broken_middle());

    assert_eq!(files.len(), 10);
    assert!(files.iter().all(|(p, _)| !p.contains("Beta")));
}

#[test]
fn test_generate_writes_and_reports_unchanged() {
    let ctx = Pipeline::new()
        .run(testing::invoice_manifest())
        .expect("Failed to run pipeline");
    let generator = Generator::from_context(&ctx);
    let temp = TempDir::new().unwrap();

    let first = generator.generate(temp.path()).unwrap();
    assert_eq!(first.written.len(), 5);
    assert!(first.unchanged.is_empty());
    assert!(
        temp.path()
            .join("src/main/java/com/acme/billing/controllers/InvoiceController.java")
            .exists()
    );

    let second = generator.generate(temp.path()).unwrap();
    assert!(second.written.is_empty());
    assert_eq!(second.unchanged.len(), 5);
}

#[test]
fn test_preview_matches_written_content() {
    let ctx = Pipeline::new()
        .run(testing::note_manifest())
        .expect("Failed to run pipeline");
    let generator = Generator::from_context(&ctx);
    let temp = TempDir::new().unwrap();
    generator.generate(temp.path()).unwrap();

    for file in generator.preview() {
        let written = std::fs::read_to_string(temp.path().join(&file.path)).unwrap();
        assert_eq!(written, file.content, "{}", file.path);
    }
}

#[test]
fn test_clashing_simple_names_are_qualified() {
    let files = generate_files(testing::manifest(
        r#"
[project]
name = "calendar"

[[types]]
name = "Event"
package = "app.model"
annotations = ["Entity"]

[[types.fields]]
name = "id"
type = "Long"
annotations = ["Id"]

[[types.fields]]
name = "created"
type = "java.util.Date"

[[types.fields]]
name = "day"
type = "java.sql.Date"
"#,
    ));
    let dto = get_file(&files, "src/main/java/app/dtos/EventDTO.java").expect("EventDTO.java not found");

    assert!(dto.contains("import java.util.Date;"));
    assert!(!dto.contains("import java.sql.Date;"));
    assert!(dto.contains("private Date created;"));
    assert!(dto.contains("private java.sql.Date day;"));
    assert!(dto.contains("public java.sql.Date getDay() {"));
    assert!(dto.contains("public void setDay(java.sql.Date day) {"));
}

#[test]
fn test_entity_named_like_framework_type() {
    let files = generate_files(testing::manifest(
        r#"
[project]
name = "ops"

[[types]]
name = "Service"
package = "app.model"
annotations = ["Entity"]

[[types.fields]]
name = "id"
type = "Long"
annotations = ["Id"]
"#,
    ));
    let service = get_file(&files, "src/main/java/app/services/ServiceService.java")
        .expect("ServiceService.java not found");

    assert!(service.contains("import org.springframework.stereotype.Service;"));
    assert!(!service.contains("import app.model.Service;"));
    assert!(service.contains("app.model.Service service = serviceMapper.toService(serviceDTO);"));

    let repository = get_file(&files, "src/main/java/app/repositories/ServiceRepository.java")
        .expect("ServiceRepository.java not found");
    assert!(repository.contains("import app.model.Service;"));
    assert!(repository.contains("extends JpaRepository<Service, Long> {"));
}

#[test]
fn test_keyword_entity_names_get_safe_variables() {
    let files = generate_files(testing::manifest(
        r#"
[project]
name = "shipping"

[[types]]
name = "Package"
package = "app.model"
annotations = ["Entity"]

[[types.fields]]
name = "id"
type = "Long"
annotations = ["Id"]

[[types]]
name = "Parcel"
package = "app.model"
annotations = ["Entity"]

[[types.fields]]
name = "id"
type = "Long"
annotations = ["Id"]

[[types.fields]]
name = "box"
type = "Package"
annotations = ["ManyToOne"]
"#,
    ));
    let mapper = get_file(&files, "src/main/java/app/mappers/PackageMapper.java")
        .expect("PackageMapper.java not found");
    assert!(mapper.contains("PackageDTO toPackageDTO(Package package_);"));
    assert!(!mapper.contains("Package package)"));

    let service = get_file(&files, "src/main/java/app/services/PackageService.java")
        .expect("PackageService.java not found");
    assert!(service.contains("Package package_ = packageMapper.toPackage(packageDTO);"));
    assert!(service.contains("packageMapper.updatePackage(packageDTO, package_);"));

    let parcel_mapper = get_file(&files, "src/main/java/app/mappers/ParcelMapper.java")
        .expect("ParcelMapper.java not found");
    assert!(parcel_mapper.contains("Package package_ = new Package();"));
    assert!(parcel_mapper.contains("package_.setId(id);"));
}
