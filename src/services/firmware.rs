use anyhow::Context;
use std::process::Command;

/// Runs one external firmware query and hands back its raw stdout text.
///
/// The firmware utility is treated as an opaque collaborator; nothing here
/// interprets the text it prints. Tests substitute a deterministic stub.
pub trait FirmwareQuery {
    fn query(&self, args: &[String]) -> anyhow::Result<String>;
}

/// Shells out to `vcgencmd`, through `sudo` unless told otherwise. The
/// firmware mailbox interface requires elevated privileges on a stock
/// Raspberry Pi OS install.
pub struct VcgencmdClient {
    program: String,
    use_sudo: bool,
}

impl VcgencmdClient {
    pub fn new(program: &str, use_sudo: bool) -> Self {
        Self {
            program: program.to_string(),
            use_sudo,
        }
    }
}

impl FirmwareQuery for VcgencmdClient {
    fn query(&self, args: &[String]) -> anyhow::Result<String> {
        let mut cmd = if self.use_sudo {
            let mut c = Command::new("sudo");
            c.arg(&self.program);
            c
        } else {
            Command::new(&self.program)
        };
        cmd.args(args);

        tracing::debug!(program = %self.program, ?args, "running firmware query");
        let out = cmd
            .output()
            .with_context(|| format!("failed to invoke {}", self.program))?;

        let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
        if out.status.success() {
            return Ok(stdout);
        }

        // Surface whatever error text the utility or privilege mechanism
        // produced; the exit status is the fallback of last resort.
        let stderr = String::from_utf8_lossy(&out.stderr);
        if !stderr.trim().is_empty() {
            anyhow::bail!("{}", stderr.trim_end());
        }
        if !stdout.trim().is_empty() {
            anyhow::bail!("{}", stdout.trim_end());
        }
        anyhow::bail!("{} exited with {}", self.program, out.status)
    }
}
