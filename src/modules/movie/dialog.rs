use tokio::sync::oneshot;
use tracing::{debug, warn};

/// `Some(true)` once an update has settled, `None` when the user backed out.
pub type DialogResult = Option<bool>;

/// Opens a dialog: the controller keeps the [`DialogRef`], the host waits on
/// the [`DialogHandle`].
pub fn channel() -> (DialogRef, DialogHandle) {
    let (sender, receiver) = oneshot::channel();
    (
        DialogRef {
            sender: Some(sender),
        },
        DialogHandle { receiver },
    )
}

#[derive(Debug)]
pub struct DialogRef {
    sender: Option<oneshot::Sender<DialogResult>>,
}

impl DialogRef {
    /// Reports `result` to the host. Only the first call has an effect.
    pub fn close(&mut self, result: DialogResult) -> bool {
        let Some(sender) = self.sender.take() else {
            warn!("Dialog already closed, ignoring result {:?}", result);
            return false;
        };

        debug!("Closing dialog with {:?}", result);
        // The host may have stopped listening; nothing to report then.
        let _ = sender.send(result);
        true
    }

    pub fn is_open(&self) -> bool {
        self.sender.is_some()
    }
}

#[derive(Debug)]
pub struct DialogHandle {
    receiver: oneshot::Receiver<DialogResult>,
}

impl DialogHandle {
    /// Waits for the dialog to close. A dropped [`DialogRef`] counts as a
    /// close without a value.
    pub async fn closed(self) -> DialogResult {
        self.receiver.await.unwrap_or(None)
    }
}
