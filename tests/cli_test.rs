//! CLI Command Tests
//!
//! Argument parsing, command handlers over the mock dataset, JSON output
//! format, exit codes and config loading.

// =============================================================================
// CLI Argument Parsing Tests
// =============================================================================

mod cli_parsing {
    use clap::Parser;
    use legaltui::cli::{Cli, Command, StatusArg, TabArg, ThemeArg};

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from(["legaltui"]);
        assert!(!cli.is_cli_mode());
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_processes_defaults() {
        let cli = Cli::parse_from(["legaltui", "processes"]);
        match cli.command {
            Some(Command::Processes(cmd)) => {
                assert_eq!(cmd.tab, TabArg::Active);
                assert_eq!(cmd.list.limit, 50);
                assert!(cmd.list.query.is_none());
            }
            _ => panic!("Expected Processes command"),
        }
    }

    #[test]
    fn test_tracking_with_filters() {
        let cli = Cli::parse_from([
            "legaltui",
            "tracking",
            "demanda",
            "--status",
            "urgent",
            "--limit",
            "2",
        ]);
        match cli.command {
            Some(Command::Tracking(cmd)) => {
                assert_eq!(cmd.list.query(), "demanda");
                assert_eq!(cmd.status, StatusArg::Urgent);
                assert_eq!(cmd.list.limit, 2);
            }
            _ => panic!("Expected Tracking command"),
        }
    }

    #[test]
    fn test_palette_mode() {
        let cli = Cli::parse_from(["legaltui", "palette", "-m", "system"]);
        match cli.command {
            Some(Command::Palette(cmd)) => assert_eq!(cmd.mode, Some(ThemeArg::System)),
            _ => panic!("Expected Palette command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "legaltui",
            "houses",
            "madrid",
            "--json",
            "-c",
            "/tmp/legaltui.toml",
        ]);
        assert!(cli.json);
        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("/tmp/legaltui.toml"))
        );
    }

    #[test]
    fn test_command_aliases() {
        for (alias, expected) in [("c", "clients"), ("p", "processes"), ("t", "tracking"), ("h", "houses")] {
            let cli = Cli::parse_from(["legaltui", alias]);
            let name = match cli.command {
                Some(Command::Clients(_)) => "clients",
                Some(Command::Processes(_)) => "processes",
                Some(Command::Tracking(_)) => "tracking",
                Some(Command::Houses(_)) => "houses",
                _ => "other",
            };
            assert_eq!(name, expected, "alias {}", alias);
        }
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Cli::try_parse_from(["legaltui", "processes", "--tab", "open"]).is_err());
        assert!(Cli::try_parse_from(["legaltui", "--theme", "sepia"]).is_err());
        assert!(Cli::try_parse_from(["legaltui", "clients", "-l", "many"]).is_err());
    }
}

// =============================================================================
// Command Handler Tests
// =============================================================================

mod handlers {
    use legaltui::cli::{
        ClientsCmd, ExitCode, HousesCmd, ListArgs, Output, PaletteCmd, ProcessesCmd, StatusArg,
        TabArg, ThemeArg, TrackingCmd,
    };
    use legaltui::commands;
    use legaltui::{Dataset, SystemScheme, ThemeMode, ThemeStore};

    fn quiet() -> Output {
        Output {
            json: true,
            quiet: true,
        }
    }

    fn list(query: &str) -> ListArgs {
        ListArgs {
            query: Some(query.to_string()),
            limit: 50,
        }
    }

    #[test]
    fn test_clients_success() {
        let cmd = ClientsCmd { list: list("garcia") };
        assert_eq!(
            commands::clients_cmd(cmd, Dataset::mock(), &quiet()),
            ExitCode::Success
        );
    }

    #[test]
    fn test_archived_processes() {
        let cmd = ProcessesCmd {
            list: list(""),
            tab: TabArg::Archived,
        };
        assert_eq!(
            commands::processes_cmd(cmd, Dataset::mock(), &quiet()),
            ExitCode::Success
        );
    }

    #[test]
    fn test_tracking_no_results() {
        let cmd = TrackingCmd {
            list: list("convenio"),
            status: StatusArg::Completed,
        };
        assert_eq!(
            commands::tracking_cmd(cmd, Dataset::mock(), &quiet()),
            ExitCode::NoResults
        );
    }

    #[test]
    fn test_houses_empty_dataset() {
        let cmd = HousesCmd { list: list("") };
        assert_eq!(
            commands::houses_cmd(cmd, &Dataset::default(), &quiet()),
            ExitCode::NoResults
        );
    }

    #[test]
    fn test_palette_mode_override() {
        let store = ThemeStore::new(ThemeMode::Light, SystemScheme::Unknown);
        let cmd = PaletteCmd {
            mode: Some(ThemeArg::Dark),
        };
        assert_eq!(commands::palette_cmd(cmd, store, &quiet()), ExitCode::Success);
    }
}

// =============================================================================
// JSON Output Format Tests
// =============================================================================

mod json_output {
    use legaltui::cli::{ExitCode, JsonOutput};
    use legaltui::Dataset;

    #[test]
    fn test_json_output_success() {
        let clients: Vec<_> = Dataset::mock().clients.iter().take(1).collect();
        let value = serde_json::to_value(JsonOutput::success(clients)).unwrap();

        let first = &value["data"][0];
        assert_eq!(first["name"], "Maria Garcia");
        assert_eq!(first["caseCount"], 3);
        assert_eq!(first["lastContact"], "12/05/2024");
        assert!(value.get("error").is_none());
        assert!(value.get("exit_code").is_none());
    }

    #[test]
    fn test_json_output_error() {
        let output = JsonOutput::<()>::error_msg("No clients match 'x'", ExitCode::NoResults);
        let value = serde_json::to_value(output).unwrap();
        assert_eq!(value["error"], "No clients match 'x'");
        assert_eq!(value["exit_code"], 3);
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_process_status_serialized_as_label() {
        let process = &Dataset::mock().processes[2];
        let value = serde_json::to_value(process).unwrap();
        assert_eq!(value["status"], "En espera");
        assert_eq!(value["type"], "Laboral");
        assert_eq!(value["caseNumber"], "EXP-2024-0211");
    }
}

// =============================================================================
// Config Tests
// =============================================================================

mod config {
    use legaltui::{Config, ConfigError, Section, ThemeMode};

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            theme: ThemeMode::Dark,
            sidebar_expanded: false,
            expanded_sections: vec!["processes".into()],
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let sidebar = loaded.sidebar_state().unwrap();
        assert!(!sidebar.is_expanded());
        assert!(sidebar.is_section_expanded(Section::Processes));
        assert!(!sidebar.is_section_expanded(Section::Clients));
    }

    #[test]
    fn test_explicit_path_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = \"sepia\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
