#[cfg(target_os = "windows")]
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        return;
    }

    let mut res = winresource::WindowsResource::new();
    res.set("ProductName", "Audiobook");
    res.set("FileDescription", "Upload and manage your PDF audiobooks");
    res.set("InternalName", "pdf-audiobook");
    res.set("OriginalFilename", "pdf-audiobook.exe");
    if let Err(err) = res.compile() {
        panic!("failed to compile Windows resources: {err}");
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {}
