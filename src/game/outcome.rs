//! End-of-turn win/loss evaluation.

use crate::game::player::PlayerState;
use crate::game::state::START_ROOM_ID;
use crate::game::types::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Escaped,
    Died,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Escaped => {
                "You use the final key on the main door. It unlocks with a loud click!\n\
You push the door open and escape the castle. Congratulations, you win!\n"
            }
            Outcome::Died => "You have died!\n",
        }
    }
}

/// Holding the final key while standing at the junction opens the main door.
pub fn check_victory(player: &PlayerState) -> bool {
    player.has(ItemId::FinalKey) && player.current_room == START_ROOM_ID
}

pub fn check_defeat(player: &PlayerState) -> bool {
    player.is_dead()
}

/// Victory is checked first; at most one outcome per turn.
pub fn evaluate(player: &PlayerState) -> Option<Outcome> {
    if check_victory(player) {
        Some(Outcome::Escaped)
    } else if check_defeat(player) {
        Some(Outcome::Died)
    } else {
        None
    }
}
