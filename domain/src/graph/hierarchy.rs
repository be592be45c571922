//! Agent → tool reference checks.

/// An agent naming a tool that is not registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownReference {
    pub agent: String,
    pub tool: String,
}

/// List every (agent, tool) pair whose tool is unknown, in declaration order
pub fn unknown_references<'a>(
    agents: impl IntoIterator<Item = (&'a str, &'a [String])>,
    is_known: impl Fn(&str) -> bool,
) -> Vec<UnknownReference> {
    agents
        .into_iter()
        .flat_map(|(agent, tools)| {
            tools
                .iter()
                .filter(|tool| !is_known(tool))
                .map(move |tool| UnknownReference {
                    agent: agent.to_string(),
                    tool: tool.clone(),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_references() {
        let a = vec!["T".to_string(), "Ghost".to_string()];
        let b = vec!["T".to_string()];
        let found = unknown_references([("A", a.as_slice()), ("B", b.as_slice())], |t| t == "T");

        assert_eq!(
            found,
            [UnknownReference {
                agent: "A".to_string(),
                tool: "Ghost".to_string()
            }]
        );
    }

    #[test]
    fn test_all_known() {
        let tools = vec!["T".to_string()];
        assert!(unknown_references([("A", tools.as_slice())], |_| true).is_empty());
    }
}
