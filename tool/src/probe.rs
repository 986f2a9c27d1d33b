use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use ezid_verify_core::RUNNING_MARKER;
use thiserror::Error;
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Answers whether a background job is currently running.
pub trait JobProbe {
    fn is_running(&self, job: &str) -> bool;
}

#[derive(Debug, Error)]
enum ProbeError {
    #[error("spawn failed: {0}")]
    Spawn(io::Error),
    #[error("wait failed: {0}")]
    Wait(io::Error),
    #[error("no stdout pipe")]
    NoStdout,
    #[error("stdout reader exited without output")]
    Reader,
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// Runs `<tool> status <job>` and looks for `active (running)` in stdout.
/// Any failure to get that far counts as not running.
pub struct StatusCommandProbe {
    tool: String,
    timeout: Duration,
}

impl StatusCommandProbe {
    pub fn new(tool: impl Into<String>, timeout: Duration) -> Self {
        Self {
            tool: tool.into(),
            timeout,
        }
    }

    fn query(&self, job: &str) -> Result<String, ProbeError> {
        let mut child = Command::new(&self.tool)
            .arg("status")
            .arg(job)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(ProbeError::Spawn)?;
        let mut stdout = child.stdout.take().ok_or(ProbeError::NoStdout)?;
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut bytes = Vec::new();
            let _ = stdout.read_to_end(&mut bytes);
            let _ = tx.send(String::from_utf8_lossy(&bytes).into_owned());
        });

        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => {
                    debug!(job, code = status.code(), "status command exited");
                    break;
                }
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ProbeError::Timeout(self.timeout));
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(err) => return Err(ProbeError::Wait(err)),
            }
        }
        // A background process left behind by the tool can hold stdout open
        // past its exit; the deadline covers that wait as well.
        match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
            Ok(stdout) => Ok(stdout),
            Err(RecvTimeoutError::Timeout) => Err(ProbeError::Timeout(self.timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(ProbeError::Reader),
        }
    }
}

impl JobProbe for StatusCommandProbe {
    fn is_running(&self, job: &str) -> bool {
        match self.query(job) {
            Ok(stdout) => stdout.contains(RUNNING_MARKER),
            Err(err) => {
                warn!(job, tool = %self.tool, error = %err, "job status query failed");
                false
            }
        }
    }
}
