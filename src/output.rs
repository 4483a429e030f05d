use std::io::{self, Write};

/// 結果行のラベル。
pub const LABEL: &[u8] = b"key";

/// `key <value>`の1行を組み立てる。
/// 値のバイト列は変換も、エスケープもしない。
pub fn render(value: &[u8]) -> Vec<u8> {
    let mut line = Vec::with_capacity(LABEL.len() + value.len() + 2);
    line.extend_from_slice(LABEL);
    line.push(b' ');
    line.extend_from_slice(value);
    line.push(b'\n');
    line
}

pub fn write_line<W: Write>(writer: &mut W, value: &[u8]) -> io::Result<()> {
    writer.write_all(&render(value))?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_label_and_value() {
        assert_eq!(render(b"hello"), b"key hello\n");
    }

    #[test]
    fn keeps_value_bytes_untouched() {
        let value = b"  tab\there \"quoted\"\r\n\xff\x00";
        let line = render(value);
        assert_eq!(&line[..4], b"key ");
        assert_eq!(&line[4..line.len() - 1], value);
    }

    #[test]
    fn empty_value_still_prints_label() {
        let mut out = Vec::new();
        write_line(&mut out, b"").unwrap();
        assert_eq!(out, b"key \n");
    }
}
