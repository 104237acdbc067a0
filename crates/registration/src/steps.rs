//! Step sequencing for the wizard.
//!
//! The flow is two fixed steps (guardian account, player count) followed
//! by four form sections per player. `generate_steps` and `resolve_step`
//! are pure functions of the player count; the controller regenerates
//! the descriptor list only when the count changes.

use serde::{Deserialize, Serialize};

/// Fixed steps before the per-player sections begin.
pub const FIXED_STEPS: usize = 2;
/// Form sections per player.
pub const STEPS_PER_PLAYER: usize = 4;

/// The four form sections each player walks through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSection {
    Basics,
    Sports,
    Personal,
    Emergency,
}

impl PlayerSection {
    pub const ALL: [PlayerSection; STEPS_PER_PLAYER] = [
        PlayerSection::Basics,
        PlayerSection::Sports,
        PlayerSection::Personal,
        PlayerSection::Emergency,
    ];

    /// Short word used in step titles.
    pub fn title_word(self) -> &'static str {
        match self {
            PlayerSection::Basics => "Basics",
            PlayerSection::Sports => "Sports",
            PlayerSection::Personal => "Personal",
            PlayerSection::Emergency => "Emergency",
        }
    }

    /// Card heading used by the front-end.
    pub fn heading(self) -> &'static str {
        match self {
            PlayerSection::Basics => "Basic Information",
            PlayerSection::Sports => "Sports Information",
            PlayerSection::Personal => "Personal Details",
            PlayerSection::Emergency => "Emergency Contact",
        }
    }
}

/// Which page of the wizard a step index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    Guardian,
    PlayerCount,
    Player {
        index: usize,
        section: PlayerSection,
    },
}

impl StepKind {
    /// The player a step belongs to, if any.
    pub fn player_index(self) -> Option<usize> {
        match self {
            StepKind::Player { index, .. } => Some(index),
            _ => None,
        }
    }
}

/// Icon vocabulary carried over from the original registration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepIcon {
    User,
    Users,
    Shirt,
    Trophy,
    Heart,
    Phone,
}

/// One page of the wizard with its presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDescriptor {
    pub kind: StepKind,
    pub title: String,
    pub icon: StepIcon,
}

/// Total number of steps for a given player count.
pub fn step_count(player_count: usize) -> usize {
    FIXED_STEPS + STEPS_PER_PLAYER * player_count
}

/// Build the ordered step list for `player_count` players.
pub fn generate_steps(player_count: usize) -> Vec<StepDescriptor> {
    let mut steps = Vec::with_capacity(step_count(player_count));
    steps.push(StepDescriptor {
        kind: StepKind::Guardian,
        title: "Parent Info".into(),
        icon: StepIcon::User,
    });
    steps.push(StepDescriptor {
        kind: StepKind::PlayerCount,
        title: "Number of Players".into(),
        icon: StepIcon::Users,
    });

    for index in 0..player_count {
        let player_number = index + 1;
        for section in PlayerSection::ALL {
            let icon = match section {
                PlayerSection::Basics => StepIcon::Shirt,
                PlayerSection::Sports => StepIcon::Trophy,
                PlayerSection::Personal => StepIcon::Heart,
                PlayerSection::Emergency => StepIcon::Phone,
            };
            steps.push(StepDescriptor {
                kind: StepKind::Player { index, section },
                title: format!("Player {} {}", player_number, section.title_word()),
                icon,
            });
        }
    }

    steps
}

/// Map a linear step index to the page it addresses.
///
/// Indices beyond the last step (possible right after the player count
/// shrinks) clamp to the last valid step.
pub fn resolve_step(step_index: usize, player_count: usize) -> StepKind {
    let last = step_count(player_count) - 1;
    let index = step_index.min(last);
    match index {
        0 => StepKind::Guardian,
        1 => StepKind::PlayerCount,
        _ => {
            let offset = index - FIXED_STEPS;
            StepKind::Player {
                index: offset / STEPS_PER_PLAYER,
                section: PlayerSection::ALL[offset % STEPS_PER_PLAYER],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn step_list_length_is_two_plus_four_per_player() {
        for count in 1..=10 {
            assert_eq!(generate_steps(count).len(), 2 + 4 * count);
        }
    }

    #[test]
    fn fixed_steps_come_first() {
        let steps = generate_steps(2);
        assert_eq!(steps[0].kind, StepKind::Guardian);
        assert_eq!(steps[0].title, "Parent Info");
        assert_eq!(steps[1].kind, StepKind::PlayerCount);
        assert_eq!(steps[1].title, "Number of Players");
    }

    #[test]
    fn player_steps_follow_in_player_then_section_order() {
        let steps = generate_steps(2);
        assert_eq!(
            steps[2].kind,
            StepKind::Player {
                index: 0,
                section: PlayerSection::Basics
            }
        );
        assert_eq!(steps[2].title, "Player 1 Basics");
        assert_eq!(
            steps[5].kind,
            StepKind::Player {
                index: 0,
                section: PlayerSection::Emergency
            }
        );
        assert_eq!(
            steps[6].kind,
            StepKind::Player {
                index: 1,
                section: PlayerSection::Basics
            }
        );
        assert_eq!(steps[9].title, "Player 2 Emergency");
    }

    #[test]
    fn resolve_matches_the_generated_list() {
        for count in 1..=10 {
            let steps = generate_steps(count);
            for (i, step) in steps.iter().enumerate() {
                assert_eq!(resolve_step(i, count), step.kind);
            }
        }
    }

    #[test]
    fn resolve_is_deterministic() {
        assert_eq!(resolve_step(7, 3), resolve_step(7, 3));
    }

    #[test]
    fn out_of_range_indices_clamp_to_the_last_step() {
        // Positioned on player 3's forms, then the count drops to 1.
        assert_eq!(
            resolve_step(13, 1),
            StepKind::Player {
                index: 0,
                section: PlayerSection::Emergency
            }
        );
    }
}
