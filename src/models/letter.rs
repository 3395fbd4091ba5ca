use serde::{Deserialize, Serialize};

/// 选项字母枚举（固定 A–E 五项）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
}

impl Letter {
    /// 按顺序排列的全部字母
    pub const ALL: [Letter; 5] = [Letter::A, Letter::B, Letter::C, Letter::D, Letter::E];

    /// 获取字母字符
    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
        }
    }

    /// 获取位置索引（A = 0）
    pub fn index(self) -> usize {
        self as usize
    }

    /// 从字符解析字母（不区分大小写）
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            _ => None,
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_accepts_lowercase() {
        assert_eq!(Letter::from_char('c'), Some(Letter::C));
        assert_eq!(Letter::from_char('E'), Some(Letter::E));
        assert_eq!(Letter::from_char('F'), None);
        assert_eq!(Letter::from_char(')'), None);
    }

    #[test]
    fn test_all_is_ordered() {
        let chars: String = Letter::ALL.iter().map(|l| l.as_char()).collect();
        assert_eq!(chars, "ABCDE");
        assert_eq!(Letter::D.index(), 3);
    }

    #[test]
    fn test_serializes_as_plain_letter() {
        assert_eq!(serde_json::to_string(&Letter::B).unwrap(), "\"B\"");
    }
}
