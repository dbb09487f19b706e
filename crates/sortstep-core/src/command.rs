//! Abstract control commands.
//!
//! Input layers translate raw events into [`Command`]s; the controller
//! never sees keys. [`Command::from_key`] covers the default keyboard
//! scheme and [`FromStr`] covers scripted drivers.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseCommandError;
use crate::kind::AlgorithmKind;

/// Controls legend for the default key bindings.
pub const CONTROLS_HELP: &str =
    "Controls: 1-Bubble | 2-Quick | 3-Merge | 4-Selection | SPACE-Start/Pause | R-Reset | +/- Speed";

/// A control command accepted by the controller.
///
/// # Examples
///
/// ```
/// use sortstep_core::{AlgorithmKind, Command};
///
/// assert_eq!(Command::from_key('2'), Ok(Command::SelectQuick));
/// assert_eq!("toggle".parse::<Command>(), Ok(Command::ToggleRun));
/// assert_eq!(Command::SelectMerge.algorithm(), Some(AlgorithmKind::Merge));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Select bubble sort.
    SelectBubble,
    /// Select quicksort.
    SelectQuick,
    /// Select merge sort.
    SelectMerge,
    /// Select selection sort.
    SelectSelection,
    /// Start a fresh run, or pause/resume the current one.
    ToggleRun,
    /// Regenerate the data and stop any run.
    Reset,
    /// Shorten the tick interval.
    SpeedUp,
    /// Lengthen the tick interval.
    SpeedDown,
}

impl Command {
    /// The select command for `kind`.
    pub fn select(kind: AlgorithmKind) -> Self {
        match kind {
            AlgorithmKind::Bubble => Self::SelectBubble,
            AlgorithmKind::Quick => Self::SelectQuick,
            AlgorithmKind::Merge => Self::SelectMerge,
            AlgorithmKind::Selection => Self::SelectSelection,
        }
    }

    /// The algorithm a select command chooses, if this is one.
    pub fn algorithm(self) -> Option<AlgorithmKind> {
        match self {
            Self::SelectBubble => Some(AlgorithmKind::Bubble),
            Self::SelectQuick => Some(AlgorithmKind::Quick),
            Self::SelectMerge => Some(AlgorithmKind::Merge),
            Self::SelectSelection => Some(AlgorithmKind::Selection),
            _ => None,
        }
    }

    /// Decode a key from the default control scheme.
    ///
    /// `1`–`4` select an algorithm, space toggles, `r` resets, `+`/`=`
    /// speeds up and `-`/`_` slows down.
    pub fn from_key(key: char) -> Result<Self, ParseCommandError> {
        match key {
            '1' => Ok(Self::SelectBubble),
            '2' => Ok(Self::SelectQuick),
            '3' => Ok(Self::SelectMerge),
            '4' => Ok(Self::SelectSelection),
            ' ' => Ok(Self::ToggleRun),
            'r' | 'R' => Ok(Self::Reset),
            '+' | '=' => Ok(Self::SpeedUp),
            '-' | '_' => Ok(Self::SpeedDown),
            other => Err(ParseCommandError::UnboundKey { key: other }),
        }
    }

    /// Canonical lower-case name, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::SelectBubble => "bubble",
            Self::SelectQuick => "quick",
            Self::SelectMerge => "merge",
            Self::SelectSelection => "selection",
            Self::ToggleRun => "toggle",
            Self::Reset => "reset",
            Self::SpeedUp => "faster",
            Self::SpeedDown => "slower",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name.to_ascii_lowercase().as_str() {
            "bubble" => Ok(Self::SelectBubble),
            "quick" => Ok(Self::SelectQuick),
            "merge" => Ok(Self::SelectMerge),
            "selection" => Ok(Self::SelectSelection),
            "toggle" | "start" | "pause" => Ok(Self::ToggleRun),
            "reset" => Ok(Self::Reset),
            "faster" => Ok(Self::SpeedUp),
            "slower" => Ok(Self::SpeedDown),
            _ => Err(ParseCommandError::UnknownName {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Command; 8] = [
        Command::SelectBubble,
        Command::SelectQuick,
        Command::SelectMerge,
        Command::SelectSelection,
        Command::ToggleRun,
        Command::Reset,
        Command::SpeedUp,
        Command::SpeedDown,
    ];

    #[test]
    fn names_parse_back() {
        for cmd in ALL {
            assert_eq!(cmd.name().parse::<Command>(), Ok(cmd));
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!("  Bubble\n".parse::<Command>(), Ok(Command::SelectBubble));
        assert_eq!("START".parse::<Command>(), Ok(Command::ToggleRun));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "heap".parse::<Command>().unwrap_err();
        assert_eq!(
            err,
            ParseCommandError::UnknownName {
                name: "heap".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown command 'heap'");
    }

    #[test]
    fn number_keys_select_in_order() {
        for (key, kind) in ['1', '2', '3', '4'].into_iter().zip(AlgorithmKind::ALL) {
            assert_eq!(Command::from_key(key).unwrap().algorithm(), Some(kind));
        }
    }

    #[test]
    fn unbound_key_is_rejected() {
        assert_eq!(
            Command::from_key('x'),
            Err(ParseCommandError::UnboundKey { key: 'x' })
        );
    }

    #[test]
    fn select_round_trips_through_algorithm() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(Command::select(kind).algorithm(), Some(kind));
        }
        assert_eq!(Command::Reset.algorithm(), None);
    }
}
