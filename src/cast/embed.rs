use base64::{Engine as _, engine::general_purpose};

/// An inline-audio fragment ready for the cast document: the raw track bytes
/// as a base64 data URL inside a hidden, autoplaying `<audio>` element. The
/// hosting page plays it as soon as the document is (re)loaded.
pub struct AudioEmbed {
    html: String,
}

impl AudioEmbed {
    pub fn new(audio_bytes: &[u8]) -> Self {
        let payload = general_purpose::STANDARD.encode(audio_bytes);
        let html = format!(
            concat!(
                "<audio autoplay style=\"display: none;\">\n",
                "  <source src=\"data:audio/wav;base64,{}\" type=\"audio/wav\">\n",
                "  Your browser does not support the audio element.\n",
                "</audio>\n",
            ),
            payload
        );
        Self { html }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine as _, engine::general_purpose};

    #[test]
    fn embed_is_hidden_autoplaying_data_url() {
        let embed = AudioEmbed::new(b"RIFFxxxxWAVE");
        let html = embed.html();
        assert!(html.starts_with("<audio autoplay"));
        assert!(html.contains("display: none"));
        assert!(html.contains("data:audio/wav;base64,"));
        assert!(html.trim_end().ends_with("</audio>"));
    }

    #[test]
    fn embed_payload_round_trips() {
        let bytes = b"RIFF\x00\x01\x02\xffWAVEfmt ";
        let embed = AudioEmbed::new(bytes);

        let html = embed.html();
        let start = html.find("base64,").unwrap() + "base64,".len();
        let end = start + html[start..].find('"').unwrap();
        let decoded = general_purpose::STANDARD.decode(&html[start..end]).unwrap();
        assert_eq!(decoded, bytes);
    }
}
