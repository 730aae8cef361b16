use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use super::{DesignRequest, InferenceError, SequenceDesigner, StructureFolder};
use crate::core::io::fasta;

/// Sequence-design backend that invokes an external program once per
/// structure.
///
/// The program receives the structure path and the run parameters as
/// arguments and must emit the generated sequences as FASTA on stdout. A
/// non-zero exit status is an invocation failure carrying the program's
/// stderr.
#[derive(Debug, Clone)]
pub struct CommandDesigner {
    program: PathBuf,
}

impl CommandDesigner {
    /// Verifies the program is spawnable, then returns the backend. A
    /// missing or non-executable program fails here, at startup, not inside
    /// a worker.
    pub fn probe(program: impl Into<PathBuf>) -> Result<Self, InferenceError> {
        let program = program.into();
        probe_program(&program)?;
        Ok(Self { program })
    }
}

impl SequenceDesigner for CommandDesigner {
    fn design(&self, request: &DesignRequest<'_>) -> Result<Vec<String>, InferenceError> {
        debug!(
            program = %self.program.display(),
            structure = %request.structure.display(),
            "Invoking sequence-design backend."
        );
        let output = Command::new(&self.program)
            .arg("--structure")
            .arg(request.structure)
            .arg("--num-sequences")
            .arg(request.sequence_count.to_string())
            .arg("--temperature")
            .arg(request.temperature.to_string())
            .arg("--seed")
            .arg(request.seed.to_string())
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            return Err(invocation_failure(&self.program, &output));
        }

        let records = fasta::read_records(&mut output.stdout.as_slice())
            .map_err(|e| InferenceError::MalformedOutput(e.to_string()))?;
        if records.is_empty() {
            return Err(InferenceError::MalformedOutput(
                "designer emitted no sequences".to_string(),
            ));
        }
        Ok(records.into_iter().map(|record| record.sequence).collect())
    }
}

/// Structure-prediction backend that invokes an external program once per
/// sequence.
///
/// The sequence is fed as a single FASTA record on stdin; stdout is taken
/// verbatim as the structure-file body.
#[derive(Debug, Clone)]
pub struct CommandFolder {
    program: PathBuf,
}

impl CommandFolder {
    pub fn probe(program: impl Into<PathBuf>) -> Result<Self, InferenceError> {
        let program = program.into();
        probe_program(&program)?;
        Ok(Self { program })
    }
}

impl StructureFolder for CommandFolder {
    fn warm_up(&self) -> Result<(), InferenceError> {
        probe_program(&self.program)
    }

    fn fold(&self, id: &str, sequence: &str) -> Result<String, InferenceError> {
        debug!(program = %self.program.display(), id, "Invoking structure-prediction backend.");
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            writeln!(stdin, ">{id}")?;
            writeln!(stdin, "{sequence}")?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(invocation_failure(&self.program, &output));
        }

        let body = String::from_utf8_lossy(&output.stdout).into_owned();
        if body.trim().is_empty() {
            return Err(InferenceError::MalformedOutput(
                "folder emitted an empty structure".to_string(),
            ));
        }
        Ok(body)
    }
}

fn probe_program(program: &Path) -> Result<(), InferenceError> {
    // Only spawnability is checked; tools that exit non-zero on --version
    // still pass.
    Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|_| ())
        .map_err(|e| InferenceError::Unavailable {
            program: program.display().to_string(),
            reason: e.to_string(),
        })
}

fn invocation_failure(program: &Path, output: &std::process::Output) -> InferenceError {
    InferenceError::Invocation(format!(
        "{} exited with {}: {}",
        program.display(),
        output.status,
        String::from_utf8_lossy(&output.stderr).trim()
    ))
}
