/// Terminal front end: renders published lists and handles commands
use crate::commands::{Command, HELP};
use crate::error::Result;
use crate::screen::{Outcome, Screen};
use roster_list::{CharacterListController, LoadHandle};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Render every snapshot the controller publishes, then serve commands
/// from `input` until it ends or the user quits.
///
/// Commands are only read once loading has finished. A failed load is
/// returned as an error without entering the command loop.
pub async fn run<R, W>(
    controller: &CharacterListController,
    handle: LoadHandle,
    input: R,
    output: &mut W,
) -> Result<Screen>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut screen = Screen::new();
    let mut updates = controller.subscribe();

    output.write_all(b"Loading characters...\n").await?;
    output.flush().await?;

    let load = handle.wait();
    tokio::pin!(load);

    let loaded = loop {
        tokio::select! {
            result = &mut load => break result,
            Ok(()) = updates.changed() => {
                screen.show(updates.borrow_and_update().clone());
                output.write_all(screen.render().as_bytes()).await?;
            }
        }
    };
    loaded?;

    // The load can finish before the select loop sees the snapshot
    if updates.has_changed().unwrap_or(false) {
        screen.show(updates.borrow_and_update().clone());
        output.write_all(screen.render().as_bytes()).await?;
    }

    output.write_all(format!("{}\n", HELP).as_bytes()).await?;
    output.flush().await?;

    let mut lines = input.lines();
    loop {
        tokio::select! {
            Ok(()) = updates.changed() => {
                screen.show(updates.borrow_and_update().clone());
                output.write_all(screen.render().as_bytes()).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }

                match line.parse::<Command>() {
                    Ok(command) => {
                        debug!(?command, "Command");
                        match screen.apply(command) {
                            Outcome::Print(text) => output.write_all(text.as_bytes()).await?,
                            Outcome::Quit => break,
                        }
                    }
                    Err(e) => {
                        output.write_all(format!("{}\n{}\n", e, HELP).as_bytes()).await?;
                    }
                }
            }
        }
        output.flush().await?;
    }

    output.flush().await?;
    Ok(screen)
}

/// Wait for the load and write the list as pretty JSON.
pub async fn run_json<W>(handle: LoadHandle, output: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let list = handle.wait().await?;

    let json = serde_json::to_string_pretty(list.records())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    output.write_all(json.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
