/// Commands the plug-in registers with the host command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Open the settings dialog
    MicadoSettings,
}

impl HostCommand {
    pub const ALL: [HostCommand; 1] = [HostCommand::MicadoSettings];

    /// Name typed at the command line
    pub fn name(&self) -> &'static str {
        match self {
            HostCommand::MicadoSettings => "MicadoSettings",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HostCommand::MicadoSettings => "Edit, import and export Micado settings",
        }
    }

    /// Look up a command by name. Like the host's own command line, names
    /// are matched case-insensitively.
    pub fn parse(input: &str) -> Option<HostCommand> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(HostCommand::parse("MicadoSettings"), Some(HostCommand::MicadoSettings));
        assert_eq!(HostCommand::parse(" micadosettings "), Some(HostCommand::MicadoSettings));
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(HostCommand::parse(""), None);
        assert_eq!(HostCommand::parse("micado_clear_marks"), None);
    }
}
