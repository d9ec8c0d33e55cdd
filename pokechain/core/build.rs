use std::path::Path;

pub fn main() {
    println!("cargo::rerun-if-changed=data/dex.ron");

    compress("data/dex.ron", "dex.ron.gz");
}

fn compress(path: impl AsRef<Path>, name: &str) {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::env;
    use std::fs::File;
    use std::io::{BufReader, BufWriter, copy};
    use std::path::PathBuf;

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("Cargo sets OUT_DIR"));

    let mut origin = BufReader::new(File::open(path.as_ref()).expect("Read dex file"));

    let mut encoder = {
        let destination = BufWriter::new(File::create(out_dir.join(name)).expect("Create file"));

        GzEncoder::new(destination, Compression::default())
    };

    copy(&mut origin, &mut encoder).expect("Compress dex file");

    let _ = encoder.finish().expect("Finish encoding");
}
