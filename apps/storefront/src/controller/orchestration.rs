//! Hands parsed UI commands to the storefront loop and applies them there.

use crossbeam_channel::{Sender, TrySendError};
use shared::{error::CommandError, protocol::UiCommand};
use storefront_core::{AnimationService, RenderSurface, Storefront};
use tracing::{debug, warn};

pub fn dispatch_ui_command(cmd_tx: &Sender<UiCommand>, cmd: UiCommand, status: &mut String) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => debug!(command = cmd_name, "queued ui->storefront command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Storefront loop stopped; restart the session".to_string();
        }
    }
}

/// Runs one command, turning a rejected operation into a reportable error.
pub fn apply_command<A: AnimationService, R: RenderSurface>(
    storefront: &mut Storefront<A, R>,
    cmd: &UiCommand,
) -> Result<(), CommandError> {
    storefront.handle(cmd).map_err(|err| {
        warn!(command = cmd.name(), error = %err, "command rejected");
        CommandError::from(err)
    })
}
