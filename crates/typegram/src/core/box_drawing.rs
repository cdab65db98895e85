//! Box drawing characters for the class box renderer

use super::CharacterSet;

/// Box drawing characters for rendering a class box
#[derive(Debug, Clone, Copy)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    /// T-junction pointing right (left edge of a separator)
    pub t_right: char,
    /// T-junction pointing left (right edge of a separator)
    pub t_left: char,
}

impl BoxChars {
    /// Box characters for the given character set
    pub fn for_style(style: CharacterSet) -> Self {
        match style {
            CharacterSet::Ascii => Self::ascii(),
            CharacterSet::Unicode => Self::unicode(),
        }
    }

    /// ASCII-only box characters
    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            t_right: '+',
            t_left: '+',
        }
    }

    /// Unicode box-drawing characters
    pub fn unicode() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
            t_right: '├',
            t_left: '┤',
        }
    }

    /// Top border spanning `width` columns
    pub fn top(&self, width: usize) -> String {
        self.rule(width, self.top_left, self.top_right)
    }

    /// Section separator spanning `width` columns
    pub fn separator(&self, width: usize) -> String {
        self.rule(width, self.t_right, self.t_left)
    }

    /// Bottom border spanning `width` columns
    pub fn bottom(&self, width: usize) -> String {
        self.rule(width, self.bottom_left, self.bottom_right)
    }

    fn rule(&self, width: usize, left: char, right: char) -> String {
        let mut line = String::with_capacity(width.saturating_mul(3));
        line.push(left);
        line.extend(std::iter::repeat(self.horizontal).take(width.saturating_sub(2)));
        line.push(right);
        line
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_chars_ascii() {
        let chars = BoxChars::for_style(CharacterSet::Ascii);
        assert_eq!(chars.top_left, '+');
        assert_eq!(chars.horizontal, '-');
        assert_eq!(chars.vertical, '|');
    }

    #[test]
    fn test_box_chars_unicode() {
        let chars = BoxChars::for_style(CharacterSet::Unicode);
        assert_eq!(chars.top_left, '┌');
        assert_eq!(chars.t_right, '├');
        assert_eq!(chars.t_left, '┤');
    }

    #[test]
    fn test_rules() {
        let chars = BoxChars::unicode();
        assert_eq!(chars.top(5), "┌───┐");
        assert_eq!(chars.separator(5), "├───┤");
        assert_eq!(chars.bottom(5), "└───┘");
        assert_eq!(chars.top(50).chars().count(), 50);
    }
}
