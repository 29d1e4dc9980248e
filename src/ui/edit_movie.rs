use crate::common::upload::SelectedFile;
use crate::modules::auth::service::AuthService;
use crate::modules::movie::controller::UpdateMovieController;
use crate::modules::movie::dialog::{self, DialogResult};
use crate::modules::movie::form::FormField;
use crate::modules::movie::model::Movie;
use crate::modules::movie::service::MovieService;
use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::warn;

/// Typed into a field to clear it.
const CLEAR: &str = "-";

/// Terminal host for the edit-movie dialog.
pub struct EditMovieDialog<R, W> {
    input: R,
    output: W,
}

impl<R, W> EditMovieDialog<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the dialog until it closes. End of input counts as cancel.
    pub async fn run(
        &mut self,
        movie: Movie,
        auth: Arc<dyn AuthService>,
        movies: Arc<dyn MovieService>,
    ) -> Result<DialogResult> {
        let (dialog_ref, handle) = dialog::channel();
        let mut controller = UpdateMovieController::new(movie, dialog_ref, auth, movies);

        self.write_line(&format!(
            "Editing movie #{} (Enter keeps a value, '{}' clears it)",
            controller.movie_id(),
            CLEAR
        ))
        .await?;

        'edit: while controller.is_open() {
            for field in FormField::ALL {
                let current = controller.form().value(field).to_string();
                let Some(answer) = self.prompt(&format!("{} [{}]: ", field.label(), current)).await?
                else {
                    controller.cancel();
                    break 'edit;
                };

                match answer.as_str() {
                    "" => {}
                    CLEAR => controller.set_field(field, ""),
                    value => controller.set_field(field, value),
                }
            }

            let Some(path) = self.prompt("Poster file (Enter to keep current): ").await? else {
                controller.cancel();
                break;
            };
            if !path.is_empty() {
                match SelectedFile::from_path(&path).await {
                    Ok(file) => controller.select_file(vec![file]),
                    Err(e) => {
                        warn!("Poster not selected: {:#}", e);
                        self.write_line(&format!("Could not read poster file: {:#}", e)).await?;
                    }
                }
            }

            let action = self.prompt("[s]ubmit, [c]ancel, [e]dit again: ").await?;
            match action.as_deref() {
                Some("s") => {
                    // A rejected submit leaves the dialog open for another pass.
                    controller.submit().await;
                    self.write_line(&controller.notification().to_string()).await?;
                }
                Some("c") | None => controller.cancel(),
                _ => continue,
            }
        }

        Ok(handle.closed().await)
    }

    /// `None` on end of input.
    async fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        self.output.write_all(label.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn write_line(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }
}
