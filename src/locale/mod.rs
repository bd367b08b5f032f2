//! Prompt and label strings for the interactive driver

use std::fmt;
use std::str::FromStr;

/// Language used for prompts and result labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Every piece of user-facing text the driver prints
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub prompt_point: &'static str,
    pub prompt_angle_degrees: &'static str,
    pub prompt_angle_radians: &'static str,
    pub prompt_line_start: &'static str,
    pub prompt_line_end: &'static str,
    pub error_point: &'static str,
    pub error_angle: &'static str,
    pub error_line_start: &'static str,
    pub error_line_end: &'static str,
    pub error_rotation: &'static str,
    pub label_original: &'static str,
    pub label_rotated: &'static str,
}

const EN: Messages = Messages {
    prompt_point: "Enter the point to rotate (x y z):",
    prompt_angle_degrees: "Enter the rotation angle (degrees):",
    prompt_angle_radians: "Enter the rotation angle (radians):",
    prompt_line_start: "Enter the line start point (x y z):",
    prompt_line_end: "Enter the line end point (x y z):",
    error_point: "Error reading point",
    error_angle: "Error reading angle",
    error_line_start: "Error reading line start point",
    error_line_end: "Error reading line end point",
    error_rotation: "Error rotating point",
    label_original: "Original point:",
    label_rotated: "Rotated point:",
};

const ZH: Messages = Messages {
    prompt_point: "请输入要旋转的点坐标（x y z）：",
    prompt_angle_degrees: "请输入旋转角度（度）：",
    prompt_angle_radians: "请输入旋转角度（弧度）：",
    prompt_line_start: "请输入直线起点坐标（x y z）：",
    prompt_line_end: "请输入直线终点坐标（x y z）：",
    error_point: "读取点坐标时出错",
    error_angle: "读取角度时出错",
    error_line_start: "读取直线起点坐标时出错",
    error_line_end: "读取直线终点坐标时出错",
    error_rotation: "旋转点时出错",
    label_original: "原始点：",
    label_rotated: "旋转后点：",
};

impl Locale {
    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Zh => &ZH,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en_us" | "english" => Ok(Locale::En),
            "zh" | "zh-cn" | "zh_cn" | "chinese" => Ok(Locale::Zh),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Zh => f.write_str("zh"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ZH-CN".parse::<Locale>().unwrap(), Locale::Zh);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn test_display_round_trip() {
        for locale in [Locale::En, Locale::Zh] {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_messages_differ_by_locale() {
        let en = Locale::En.messages();
        let zh = Locale::Zh.messages();
        assert!(en.prompt_point.contains("x y z"));
        assert!(zh.prompt_point.contains("x y z"));
        assert_ne!(en.label_rotated, zh.label_rotated);
    }
}
