//! Line-oriented command loop

use crate::commands::{execute, Command, Outcome};
use crate::error::Result;
use cadence_playback::PlaybackSession;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

/// Read commands from `input` until `quit` or end of input
///
/// Command failures are reported on `output` and the loop continues.
pub async fn run<R, W>(session: &mut PlaybackSession, input: R, mut output: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(input).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match line.parse::<Command>() {
            Ok(command) => match execute(session, command).await {
                Ok(Outcome::Continue(message)) => message,
                Ok(Outcome::Quit) => break,
                Err(e) => {
                    warn!("Command '{}' failed: {}", line.trim(), e);
                    format!("error: {}", e)
                }
            },
            Err(e) => format!("error: {}", e),
        };

        for event in session.apply(|c| c.drain_events()).await {
            debug!("Event: {:?}", event);
        }

        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }

    Ok(())
}
