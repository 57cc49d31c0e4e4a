#[cfg(target_os = "windows")]
fn main() {
    println!("cargo:rerun-if-changed=assets/icon.ico");
    let mut res = winres::WindowsResource::new();
    res.set_icon("assets/icon.ico")
        .set("InternalName", "Algo4evaluation.exe")
        .set("FileDescription", "Algo4evaluation")
        .set_language(0x0409);
    if let Err(err) = res.compile() {
        eprintln!("winres error: {err}");
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {
    println!("cargo:rerun-if-changed=assets/appicon.png");
}
