//! Line parsing for in-game commands.
//!
//! Input is trimmed and lower-cased, then split on whitespace into a verb and
//! its arguments. Parsing never touches game state; `session` dispatches the
//! resulting [`GameCommand`].

/// Parsed form of a single command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Quit,                                          // QUIT, EXIT
    Look(Option<String>),                          // LOOK, LOOK book
    Take(String),                                  // TAKE item (last token wins)
    Use { item: String, target: Option<String> },  // USE item [ON target]
    Go,                                            // GO, MOVE - asks for a direction next
    Help,                                          // HELP, ?
    Inventory,                                     // INVENTORY, INV, I
    Status,                                        // STATUS, HEALTH

    /// Recognized verb with a missing argument; carries the reply to show.
    Incomplete(&'static str),
    /// Blank line
    Empty,
    Unknown(String),
}

/// Normalize raw player input the same way for commands and sub-prompts.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn parse_command(raw: &str) -> GameCommand {
    let input = normalize(raw);
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(verb) = parts.first() else {
        return GameCommand::Empty;
    };

    match *verb {
        "quit" | "exit" => GameCommand::Quit,
        "look" | "inspect" => GameCommand::Look(parts.get(1).map(|s| s.to_string())),
        "take" | "pick" => {
            if parts.len() < 2 {
                GameCommand::Incomplete("Take what?")
            } else {
                // "pick up sword" and "take sword" both land on "sword".
                GameCommand::Take(parts[parts.len() - 1].to_string())
            }
        }
        "use" => {
            if parts.len() < 2 {
                return GameCommand::Incomplete("Use what?");
            }
            let item = parts[1].to_string();
            match parts.iter().position(|p| *p == "on") {
                Some(on) => match parts.get(on + 1) {
                    Some(target) => GameCommand::Use {
                        item,
                        target: Some(target.to_string()),
                    },
                    None => GameCommand::Incomplete("Use item on what?"),
                },
                None => GameCommand::Use { item, target: None },
            }
        }
        "go" | "move" => GameCommand::Go,
        "help" | "?" => GameCommand::Help,
        "inventory" | "inv" | "i" => GameCommand::Inventory,
        "status" | "health" => GameCommand::Status,
        _ => GameCommand::Unknown(input.clone()),
    }
}

pub fn help_text() -> &'static str {
    "Castle Escape commands:\n\
 take <item>        pick up an item, e.g. 'take food'\n\
 look [item]        look around, or examine an item, e.g. 'look book'\n\
 use <item>         use an item you carry, e.g. 'use potion'\n\
 go | move          see where you can go next, then type a path\n\
 inventory | i      list what you carry\n\
 status             show your health\n\
 quit | exit        stop the game\n"
}
