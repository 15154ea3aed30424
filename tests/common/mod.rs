use assert_cmd::Command;
use std::path::Path;

/// Command with a private config home and no inherited logging filter
pub fn moodmeter_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("moodmeter").unwrap();
    cmd.env("MOODMETER_HOME", home);
    cmd.env_remove("MOODMETER_LOG");
    cmd
}
