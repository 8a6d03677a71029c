use assert_cmd::Command;

pub fn domset_cmd() -> Command {
    let mut cmd = Command::cargo_bin("domset").unwrap();
    cmd.env_remove("MIN_LINES");
    cmd.env_remove("TAG_POLICY_FILE");
    cmd.env_remove("CUSTOMIZATION_FILE");
    cmd
}
