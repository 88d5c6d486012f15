use std::collections::HashMap;
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use nanoshell::errors::Result;
use nanoshell::exec::{CommandOutcome, LaunchRequest, Launcher};
use nanoshell::types::RedirectMode;

/// One launch as seen by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRecord {
    pub program: String,
    pub args: Vec<String>,
    pub redirect: Option<(RedirectMode, PathBuf)>,
}

/// How the fake responds to a given program.
#[derive(Debug, Clone)]
pub enum FakeBehaviour {
    ExitWith(i32),
    ExecFails(String),
    /// Never completes; only a shutdown request gets the loop past it.
    Hang,
}

/// A fake launcher that:
/// - records every launch (program, argv, redirect)
/// - writes `args.join(" ")` plus a newline into the redirect file when the
///   program is `echo`, so redirect tests can check file contents
/// - exits 0 unless a behaviour was registered for the program.
///
/// Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct FakeLauncher {
    launched: Arc<Mutex<Vec<LaunchRecord>>>,
    behaviours: Arc<Mutex<HashMap<String, FakeBehaviour>>>,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behaviour(self, program: &str, behaviour: FakeBehaviour) -> Self {
        self.behaviours
            .lock()
            .unwrap()
            .insert(program.to_string(), behaviour);
        self
    }

    pub fn launched(&self) -> Vec<LaunchRecord> {
        self.launched.lock().unwrap().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.launched().into_iter().map(|r| r.program).collect()
    }
}

impl Launcher for FakeLauncher {
    fn launch<'a>(
        &'a mut self,
        request: LaunchRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>> {
        let args: Vec<String> = request.args.iter().map(|a| a.to_string()).collect();
        let record = LaunchRecord {
            program: request.program.to_string(),
            args: args.clone(),
            redirect: request
                .redirect
                .as_ref()
                .map(|r| (r.mode, r.path.clone())),
        };
        self.launched.lock().unwrap().push(record);

        if let Some(mut redirect) = request.redirect {
            if request.program == "echo" {
                writeln!(redirect.file, "{}", args.join(" ")).unwrap();
            }
        }

        let behaviour = self.behaviours.lock().unwrap().get(request.program).cloned();

        Box::pin(async move {
            match behaviour {
                None => Ok(CommandOutcome::Success),
                Some(FakeBehaviour::ExitWith(0)) => Ok(CommandOutcome::Success),
                Some(FakeBehaviour::ExitWith(code)) => Ok(CommandOutcome::Failed(code)),
                Some(FakeBehaviour::ExecFails(reason)) => Ok(CommandOutcome::ExecFailed { reason }),
                Some(FakeBehaviour::Hang) => std::future::pending().await,
            }
        })
    }
}
