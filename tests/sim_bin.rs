use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "3"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"].as_array().unwrap().len(), 3);
    assert!(v["best_tile"].as_u64().unwrap() >= 4);
}

#[test]
fn replay_is_deterministic() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_fivetwelve"))
            .args(["replay", "llrruudd", "--seed", "42"])
            .output()
            .expect("failed to run fivetwelve binary")
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    let v: serde_json::Value = serde_json::from_slice(&first.stdout).expect("invalid json");
    assert_eq!(v["moves"], 8);
    assert_eq!(v["grid"].as_array().unwrap().len(), 4);
}

#[test]
fn replay_rejects_bad_moves() {
    let output = Command::new(env!("CARGO_BIN_EXE_fivetwelve"))
        .args(["replay", "lq"])
        .output()
        .expect("failed to run fivetwelve binary");
    assert!(!output.status.success());
}
