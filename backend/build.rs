use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new()
                .overwrite(true)
                .copy_inside(true),
        )
        .unwrap();
    } else {
        // `include_dir!` needs static/dist to exist even when the admin
        // bundle has not been built; embed a stub page in that case.
        let fallback = out_dir.join("dist");
        fs::create_dir_all(&fallback).unwrap();
        let index = fallback.join("index.html");
        if !index.exists() {
            fs::write(
                index,
                "<!doctype html>\n<title>VoyageDesk</title>\n<p>Admin bundle not built. Run trunk build in frontend/ first.</p>\n",
            )
            .unwrap();
        }
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
