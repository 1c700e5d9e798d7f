//! Action-command parser.
//!
//! A turn's output is a single line of `;`-separated actions:
//!
//! | Action                    | Request                                  |
//! |---------------------------|------------------------------------------|
//! | `TUBE a b`                | `ConstructionRequest::Edge`              |
//! | `UPGRADE a b`             | `ConstructionRequest::Upgrade`           |
//! | `TELEPORT entry exit`     | `ConstructionRequest::Shortcut`          |
//! | `POD id s1 s2 …`          | `ConstructionRequest::Pod` (≥ 1 stop)    |
//! | `DESTROY id`              | `ConstructionRequest::Destroy`           |
//! | `WAIT` or empty action    | nothing                                  |
//!
//! Integers are read as 32-bit signed values; anything outside that range is
//! a syntax error.  Negative ids become `INVALID` sentinels and are rejected
//! later by the network as missing or out of range, which is recoverable.
//! Syntax errors are not: they surface as [`CommandError`].

use tc_core::{NodeId, PodId};
use tc_network::ConstructionRequest;

use crate::{CommandError, CommandResult};

/// Split a turn's output line into raw actions.  An entirely empty line is
/// a protocol error.
pub fn split_actions(line: &str) -> CommandResult<impl Iterator<Item = &str>> {
    if line.is_empty() {
        return Err(CommandError::EmptyLine);
    }
    Ok(line.split(';').map(str::trim))
}

/// Parse one action.  Returns `Ok(None)` for `WAIT` and empty actions.
pub fn parse_action(action: &str) -> CommandResult<Option<ConstructionRequest>> {
    let tokens: Vec<&str> = action.split(' ').collect();
    let verb = tokens[0];
    let args = &tokens[1..];

    let request = match verb {
        "TUBE" => {
            let [a, b] = node_pair(args, action, "TUBE [buildingId1] [buildingId2]")?;
            ConstructionRequest::Edge { a, b }
        }
        "UPGRADE" => {
            let [a, b] = node_pair(args, action, "UPGRADE [buildingId1] [buildingId2]")?;
            ConstructionRequest::Upgrade { a, b }
        }
        "TELEPORT" => {
            let [entry, exit] = node_pair(args, action, "TELEPORT [buildingIdEntrance] [buildingIdExit]")?;
            ConstructionRequest::Shortcut { entry, exit }
        }
        "POD" => {
            if args.len() < 2 {
                return Err(CommandError::Arity {
                    expected: "POD [podId] [buildingId1] [buildingId2] ...",
                    received: action.to_string(),
                });
            }
            let id = PodId::from_raw(integer(args[0], action)?);
            let route = args[1..]
                .iter()
                .map(|t| integer(t, action).map(NodeId::from_raw))
                .collect::<CommandResult<Vec<_>>>()?;
            ConstructionRequest::Pod { id, route }
        }
        "DESTROY" => {
            if args.len() != 1 {
                return Err(CommandError::Arity {
                    expected: "DESTROY [podId]",
                    received: action.to_string(),
                });
            }
            ConstructionRequest::Destroy { id: PodId::from_raw(integer(args[0], action)?) }
        }
        "WAIT" | "" => return Ok(None),
        other => return Err(CommandError::UnknownAction(other.to_string())),
    };
    Ok(Some(request))
}

/// Parse a whole line into requests, stopping at the first protocol error.
pub fn parse_actions(line: &str) -> CommandResult<Vec<ConstructionRequest>> {
    let mut requests = Vec::new();
    for action in split_actions(line)? {
        if let Some(request) = parse_action(action)? {
            requests.push(request);
        }
    }
    Ok(requests)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn integer(token: &str, action: &str) -> CommandResult<i64> {
    token
        .parse::<i32>()
        .map(i64::from)
        .map_err(|_| CommandError::InvalidInteger(action.to_string()))
}

fn node_pair(args: &[&str], action: &str, expected: &'static str) -> CommandResult<[NodeId; 2]> {
    if args.len() != 2 {
        return Err(CommandError::Arity { expected, received: action.to_string() });
    }
    Ok([
        NodeId::from_raw(integer(args[0], action)?),
        NodeId::from_raw(integer(args[1], action)?),
    ])
}
