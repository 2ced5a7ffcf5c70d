use serde::{Deserialize, Serialize};

/// README输出语言
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetLanguage {
    #[serde(rename = "en")]
    #[default]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "sv")]
    Swedish,
    #[serde(rename = "no")]
    Norwegian,
    #[serde(rename = "da")]
    Danish,
    #[serde(rename = "fi")]
    Finnish,
    #[serde(rename = "el")]
    Greek,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 20] = [
        TargetLanguage::English,
        TargetLanguage::Spanish,
        TargetLanguage::French,
        TargetLanguage::German,
        TargetLanguage::Italian,
        TargetLanguage::Portuguese,
        TargetLanguage::Russian,
        TargetLanguage::Japanese,
        TargetLanguage::Korean,
        TargetLanguage::Chinese,
        TargetLanguage::Arabic,
        TargetLanguage::Hindi,
        TargetLanguage::Turkish,
        TargetLanguage::Polish,
        TargetLanguage::Dutch,
        TargetLanguage::Swedish,
        TargetLanguage::Norwegian,
        TargetLanguage::Danish,
        TargetLanguage::Finnish,
        TargetLanguage::Greek,
    ];

    /// ISO 639-1 语言代码
    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::English => "en",
            TargetLanguage::Spanish => "es",
            TargetLanguage::French => "fr",
            TargetLanguage::German => "de",
            TargetLanguage::Italian => "it",
            TargetLanguage::Portuguese => "pt",
            TargetLanguage::Russian => "ru",
            TargetLanguage::Japanese => "ja",
            TargetLanguage::Korean => "ko",
            TargetLanguage::Chinese => "zh",
            TargetLanguage::Arabic => "ar",
            TargetLanguage::Hindi => "hi",
            TargetLanguage::Turkish => "tr",
            TargetLanguage::Polish => "pl",
            TargetLanguage::Dutch => "nl",
            TargetLanguage::Swedish => "sv",
            TargetLanguage::Norwegian => "no",
            TargetLanguage::Danish => "da",
            TargetLanguage::Finnish => "fi",
            TargetLanguage::Greek => "el",
        }
    }

    /// 获取语言的英文名称
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetLanguage::English => "English",
            TargetLanguage::Spanish => "Spanish",
            TargetLanguage::French => "French",
            TargetLanguage::German => "German",
            TargetLanguage::Italian => "Italian",
            TargetLanguage::Portuguese => "Portuguese",
            TargetLanguage::Russian => "Russian",
            TargetLanguage::Japanese => "Japanese",
            TargetLanguage::Korean => "Korean",
            TargetLanguage::Chinese => "Chinese",
            TargetLanguage::Arabic => "Arabic",
            TargetLanguage::Hindi => "Hindi",
            TargetLanguage::Turkish => "Turkish",
            TargetLanguage::Polish => "Polish",
            TargetLanguage::Dutch => "Dutch",
            TargetLanguage::Swedish => "Swedish",
            TargetLanguage::Norwegian => "Norwegian",
            TargetLanguage::Danish => "Danish",
            TargetLanguage::Finnish => "Finnish",
            TargetLanguage::Greek => "Greek",
        }
    }

    /// 语言选择器中使用的旗帜
    pub fn flag(&self) -> &'static str {
        match self {
            TargetLanguage::English => "🇺🇸",
            TargetLanguage::Spanish => "🇪🇸",
            TargetLanguage::French => "🇫🇷",
            TargetLanguage::German => "🇩🇪",
            TargetLanguage::Italian => "🇮🇹",
            TargetLanguage::Portuguese => "🇵🇹",
            TargetLanguage::Russian => "🇷🇺",
            TargetLanguage::Japanese => "🇯🇵",
            TargetLanguage::Korean => "🇰🇷",
            TargetLanguage::Chinese => "🇨🇳",
            TargetLanguage::Arabic => "🇸🇦",
            TargetLanguage::Hindi => "🇮🇳",
            TargetLanguage::Turkish => "🇹🇷",
            TargetLanguage::Polish => "🇵🇱",
            TargetLanguage::Dutch => "🇳🇱",
            TargetLanguage::Swedish => "🇸🇪",
            TargetLanguage::Norwegian => "🇳🇴",
            TargetLanguage::Danish => "🇩🇰",
            TargetLanguage::Finnish => "🇫🇮",
            TargetLanguage::Greek => "🇬🇷",
        }
    }

    /// 获取语言的提示词指令
    pub fn prompt_instruction(&self) -> String {
        format!(
            "Write every section of the README in {}. Keep code blocks, commands and file paths unchanged.",
            self.display_name()
        )
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        TargetLanguage::ALL
            .iter()
            .find(|lang| lang.code() == lowered || lang.display_name().to_lowercase() == lowered)
            .copied()
            .ok_or_else(|| format!("Unknown target language: {}", s))
    }
}
