//! Assembly of the generated `parliament.go` file.
//!
//! The file carries a build-constraint line and a generated-code marker,
//! the consuming plugin's package declaration, and one zero-argument accessor
//! whose body is the whole permission dataset as a slice literal. The data is
//! baked into source; nothing is computed or parsed when the consumer calls
//! the accessor.

use std::path::Path;
use std::process::Command;

use crate::emission::go_literal::GoLiteral;
use crate::error::{DatagenError, DatagenResult};
use crate::model::Service;

/// Build-constraint and generated-code marker emitted at the top of the file.
const FILE_HEADER: &str = "//go:build !lint\n// Code generated by parliament-datagen; DO NOT EDIT.\n";

/// Package of the consuming plugin.
const PACKAGE: &str = "package aws";

/// Name of the generated zero-argument accessor.
const ACCESSOR: &str = "getParliamentIamPermissions";

/// Render the complete generated file as a string.
///
/// Services appear in input order; the output is a pure function of the
/// input, so two runs over the same document are byte-identical.
pub fn render_permissions_file(services: &[Service]) -> String {
    let mut out = String::new();
    out.push_str(FILE_HEADER);
    out.push('\n');
    out.push_str(PACKAGE);
    out.push_str("\n\n");
    out.push_str("func ");
    out.push_str(ACCESSOR);
    out.push_str("() []");
    out.push_str(Service::go_type());
    out.push_str(" {\npermissions := []");
    out.push_str(Service::go_type());
    out.push_str("{\n");
    for service in services {
        service.write_literal(&mut out);
    }
    out.push_str("}\n\nreturn permissions\n}\n");
    out
}

/// Write the generated file to `path`, overwriting any existing file, then
/// run gofmt on it unless `format` is false.
///
/// The write is truncate-then-replace with no backup; a failure mid-write can
/// leave a partial file behind. The file is fully written and closed before
/// gofmt sees it. A gofmt that cannot be spawned is an error; a gofmt that
/// exits non-zero only logs a warning and leaves the unformatted file in
/// place.
pub fn write_permissions_file(services: &[Service], path: &Path, format: bool) -> DatagenResult<()> {
    let rendered = render_permissions_file(services);
    std::fs::write(path, &rendered)
        .map_err(|e| DatagenError::io(format!("Failed to write {}", path.display()), e))?;
    log::info!(
        "Wrote {} services ({} bytes) to {}",
        services.len(),
        rendered.len(),
        path.display()
    );

    if format {
        let status = Command::new("gofmt")
            .arg("-w")
            .arg(path)
            .status()
            .map_err(DatagenError::Formatter)?;
        if !status.success() {
            log::warn!(
                "gofmt exited with {} on {}; leaving the file unformatted",
                status,
                path.display()
            );
        }
    }

    Ok(())
}
