//! 文件魔术字节校验
//!
//! 上传时用首个 chunk 的前几个字节核对扩展名，拦截改扩展名伪装的文件。
//! 纯文本类扩展名没有魔术字节，直接放行。

pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    match extension {
        ".jpg" | ".jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        ".png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47]),
        ".gif" => data.starts_with(b"GIF8"),
        ".webp" => data.starts_with(b"RIFF") && data.len() >= 12 && &data[8..12] == b"WEBP",
        ".pdf" => data.starts_with(b"%PDF"),
        // Office OpenXML 和 zip 同为 PK 容器
        ".zip" | ".docx" | ".xlsx" | ".pptx" => data.starts_with(&[0x50, 0x4B]),
        // 旧版 Office（OLE 复合文档）
        ".doc" | ".xls" | ".ppt" => data.starts_with(&[0xD0, 0xCF, 0x11, 0xE0]),
        ".mp4" | ".m4v" => data.len() >= 8 && &data[4..8] == b"ftyp",
        ".webm" | ".mkv" => data.starts_with(&[0x1A, 0x45, 0xDF, 0xA3]),
        ".mp3" => data.starts_with(b"ID3") || data.starts_with(&[0xFF, 0xFB]),
        // 纯文本没有魔术字节
        ".txt" | ".md" | ".csv" => true,
        // 未知扩展名不做内容校验（扩展名白名单在上层把关）
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_magic() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(validate_magic_bytes(&png, ".png"));
        assert!(!validate_magic_bytes(&png, ".jpg"));
    }

    #[test]
    fn test_jpeg_magic() {
        let jpg = [0xFF, 0xD8, 0xFF, 0xE0];
        assert!(validate_magic_bytes(&jpg, ".jpg"));
        assert!(validate_magic_bytes(&jpg, ".jpeg"));
    }

    #[test]
    fn test_pdf_magic() {
        assert!(validate_magic_bytes(b"%PDF-1.7", ".pdf"));
        assert!(!validate_magic_bytes(b"not a pdf", ".pdf"));
    }

    #[test]
    fn test_openxml_is_zip_container() {
        let pk = [0x50, 0x4B, 0x03, 0x04];
        assert!(validate_magic_bytes(&pk, ".docx"));
        assert!(validate_magic_bytes(&pk, ".zip"));
    }

    #[test]
    fn test_mp4_ftyp_at_offset_4() {
        let mp4 = [0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p'];
        assert!(validate_magic_bytes(&mp4, ".mp4"));
        assert!(!validate_magic_bytes(&mp4[..4], ".mp4"));
    }

    #[test]
    fn test_text_has_no_magic() {
        assert!(validate_magic_bytes(b"hello", ".txt"));
        assert!(validate_magic_bytes(b"", ".md"));
    }

    #[test]
    fn test_disguised_extension_rejected() {
        // zip 伪装成 png
        let pk = [0x50, 0x4B, 0x03, 0x04];
        assert!(!validate_magic_bytes(&pk, ".png"));
    }
}
