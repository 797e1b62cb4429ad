use std::process::Command;

fn git_rev_parse(args: &[&str]) -> String {
    match Command::new("git").arg("rev-parse").args(args).output() {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map_or_else(|_| "unknown".to_string(), |s| s.trim().to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // Git commit hash shown by `wordsearch --version`
    println!("cargo:rustc-env=GIT_HASH={}", git_rev_parse(&["--short", "HEAD"]));
    println!("cargo:rustc-env=GIT_HASH_FULL={}", git_rev_parse(&["HEAD"]));

    println!("cargo:rerun-if-changed=.git/HEAD");
}
