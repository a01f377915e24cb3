pub mod server;
pub mod submit;

// Dispatch lives in a separate module so `mod.rs` stays small.
mod run;

#[derive(Debug)]
pub enum Action {
    Server(server::Args),
    Submit(submit::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
