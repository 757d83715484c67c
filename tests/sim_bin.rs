use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("42")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 42);
    assert!(v["winner"] == "human" || v["winner"] == "computer");
    assert!(v["shots"]["human"].as_u64().unwrap() > 0);
    assert!(v["placement_attempts"]["computer"].as_u64().unwrap() >= 1);
}
