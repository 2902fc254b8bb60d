//! ファイルI/Oユーティリティ（gzip入力対応・追記出力）

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

const READER_BUF_CAP: usize = 128 * 1024; // 128 KiB

/// 出力ファイル名に挿入する接尾辞
pub const INDEXES_SUFFIX: &str = "_indexes";

fn is_stdio(path: &Path) -> bool {
    path.to_string_lossy() == "-"
}

fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// `-` なら stdin、`.gz` なら展開しながら読む
pub fn open_reader<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let p = path.as_ref();
    if is_stdio(p) {
        return Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, io::stdin())));
    }
    let f = File::open(p)?;
    if is_gzip(p) {
        let dec = flate2::read::GzDecoder::new(f);
        return Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, dec)));
    }
    Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, f)))
}

/// ログ全体を読み込む。UTF-8 として不正なら `InvalidData`
pub fn read_log<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let mut text = String::new();
    open_reader(path)?.read_to_string(&mut text)?;
    Ok(text)
}

/// Writer wrapper to propagate flush/close errors on the append sink.
#[must_use = "call .close() to propagate IO errors"]
pub enum Writer {
    Plain(BufWriter<File>),
    Stdout(std::io::Stdout),
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Writer::Plain(f) => f.write(buf),
            Writer::Stdout(s) => s.write(buf),
        }
    }
    fn flush(&mut self) -> io::Result<()> {
        match self {
            Writer::Plain(f) => f.flush(),
            Writer::Stdout(s) => s.flush(),
        }
    }
}

impl Writer {
    /// Flush buffered data and close the underlying file/stdout.
    pub fn close(self) -> io::Result<()> {
        match self {
            Writer::Plain(f) => {
                let mut file = f.into_inner().map_err(|e| e.into_error())?;
                file.flush()
            }
            Writer::Stdout(mut s) => s.flush(),
        }
    }
}

/// 追記モードで開く（無ければ作成、既存内容は切り詰めない）。`-` は stdout
pub fn open_append_writer<P: AsRef<Path>>(path: P) -> io::Result<Writer> {
    let p = path.as_ref();
    if is_stdio(p) {
        return Ok(Writer::Stdout(std::io::stdout()));
    }
    let f = OpenOptions::new().create(true).append(true).open(p)?;
    Ok(Writer::Plain(BufWriter::new(f)))
}

/// 入力ログのパスから指標ファイルのパスを作る。
///
/// ファイル名の最後の `.` 以降を拡張子として `<base>_indexes.<ext>` にする
/// （`log.txt` → `log_indexes.txt`）。ディレクトリ部分はそのまま。
/// `.gz` は先に外す（`log.txt.gz` → `log_indexes.txt`）。
/// 拡張子が無い名前（先頭の `.` のみも含む）は `_indexes` を付けるだけ。
pub fn indexes_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let mut name = input.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    if is_gzip(input) {
        name.truncate(name.len() - ".gz".len());
    }
    let out = match name.rfind('.') {
        Some(pos) if pos > 0 => {
            format!("{}{INDEXES_SUFFIX}.{}", &name[..pos], &name[pos + 1..])
        }
        _ => format!("{name}{INDEXES_SUFFIX}"),
    };
    input.with_file_name(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_path_simple() {
        assert_eq!(indexes_path("log.txt"), PathBuf::from("log_indexes.txt"));
        assert_eq!(indexes_path("runs/a.b/log.txt"), PathBuf::from("runs/a.b/log_indexes.txt"));
        assert_eq!(indexes_path("run.2024.log"), PathBuf::from("run.2024_indexes.log"));
    }

    #[test]
    fn test_indexes_path_gz_and_no_extension() {
        assert_eq!(indexes_path("log.txt.gz"), PathBuf::from("log_indexes.txt"));
        assert_eq!(indexes_path("log"), PathBuf::from("log_indexes"));
        assert_eq!(indexes_path(".log"), PathBuf::from(".log_indexes"));
        assert_eq!(indexes_path("log."), PathBuf::from("log_indexes."));
    }

    #[test]
    fn test_append_writer_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        for chunk in ["first\n", "second\n"] {
            let mut w = open_append_writer(&path).unwrap();
            w.write_all(chunk.as_bytes()).unwrap();
            w.close().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_read_log_plain_and_gz() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("log.txt");
        std::fs::write(&plain, "r1(2):a\n\nr1(3):b").unwrap();
        assert_eq!(read_log(&plain).unwrap(), "r1(2):a\n\nr1(3):b");

        let gz = dir.path().join("log.txt.gz");
        let mut enc =
            flate2::write::GzEncoder::new(File::create(&gz).unwrap(), flate2::Compression::default());
        enc.write_all(b"r1(4):c").unwrap();
        enc.finish().unwrap();
        assert_eq!(read_log(&gz).unwrap(), "r1(4):c");
    }

    #[test]
    fn test_read_log_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        std::fs::write(&path, b"r1(2):a\n\nr1(\xff):b").unwrap();
        let err = read_log(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_read_log_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_log(dir.path().join("nope.txt")).is_err());
    }
}
