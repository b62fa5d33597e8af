use std::io::Write;
use std::path::Path;

use creator_core::error::SENTINEL_PREFIX;
use creator_core::CreatorError;
use tracing::{info, warn};

use crate::backend::ScriptBackend;
use crate::{generator, intake, output};

/// Run one instruction file through the model and save the result.
///
/// Progress lines go to `console`. Failures are returned, not printed; the
/// caller decides how to report them. Nothing is written to `output_path`
/// unless generation succeeded with text that does not start with the
/// `# Error` marker; such text is printed instead.
pub async fn run<W: Write>(
    backend: &dyn ScriptBackend,
    instruction_path: &Path,
    output_path: &Path,
    console: &mut W,
) -> Result<(), CreatorError> {
    let instructions = intake::load_instructions(instruction_path)?;

    let _ = writeln!(
        console,
        "Generating Python script from '{}'...",
        instruction_path.display()
    );
    let script = generator::generate_script(backend, &instructions).await?;

    // Anything that reads as a sentinel goes to the console, never to disk.
    if script.starts_with(SENTINEL_PREFIX) {
        warn!("generated text starts with the error marker; not writing output");
        let _ = writeln!(console, "{script}");
        return Ok(());
    }

    output::write_script(output_path, &script)?;
    info!(output = %output_path.display(), "done");
    let _ = writeln!(
        console,
        "\nSuccessfully generated and saved Python script to '{}'",
        output_path.display()
    );
    Ok(())
}

/// Run the pipeline and print any failure as a single console line.
///
/// Every outcome ends here cleanly; the process exit status does not change.
pub async fn run_and_report<W: Write>(
    backend: &dyn ScriptBackend,
    instruction_path: &Path,
    output_path: &Path,
    console: &mut W,
) {
    if let Err(e) = run(backend, instruction_path, output_path, console).await {
        info!(generation = e.is_generation(), "run ended without output");
        let _ = writeln!(console, "{e}");
    }
}
