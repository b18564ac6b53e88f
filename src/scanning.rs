use crate::error_handling::*;
use log::trace;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    identifier, number, operator, prefix, punctuation
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub content: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(content: impl Into<String>, kind: TokenKind) -> Self {
        Self{content: content.into(), kind}
    }
}

pub trait Scanner {
    fn get_current(&self) -> Option<&Token>;
    fn advance(&mut self) -> Result<()>;
    fn is_valid(&self) -> bool;
}

/// Scans an expression one token at a time. Whitespace is dropped up front,
/// so "- 6" and "-6" scan the same way.
pub struct StringScanner {
    characters: Vec<char>,
    token: Option<Token>,
    index: usize,
}

fn is_operator(character: char) -> bool {
    match character {
        '+' | '-' | '*' | '/' => true,
        _ => false
    }
}

fn is_punctuation(character: char) -> bool {
    match character {
        '(' | ')' => true,
        _ => false
    }
}

fn is_digit_or_dot(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

// A '-' in value position negates whatever follows unless a literal follows.
fn starts_negation(character: char) -> bool {
    character.is_alphabetic() || character == '(' || character == '-'
}

impl StringScanner {
    pub fn new(string: &str) -> Self {
        Self {
            characters: string.chars().filter(|c| !c.is_whitespace()).collect(),
            token: None,
            index: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    fn count<P: Fn(char) -> bool>(&self, start: usize, predicate: P) -> usize {
        self.characters[start..].iter().take_while(|&&c| predicate(c)).count()
    }

    fn slice(&self, count: usize) -> String {
        self.characters[self.index..(self.index + count)].iter().collect()
    }

    /// True at the start of the expression or right after an operator or '('.
    fn expects_value(&self) -> bool {
        match self.index.checked_sub(1).map(|previous| self.characters[previous]) {
            None => true,
            Some(previous) => is_operator(previous) || previous == '(',
        }
    }

    fn get_number(&self) -> Token {
        let sign = usize::from(self.characters[self.index] == '-');
        let count = sign + self.count(self.index + sign, is_digit_or_dot);
        Token::new(self.slice(count), TokenKind::number)
    }

    fn get_identifier(&self) -> Token {
        let count = self.count(self.index, char::is_alphabetic);
        Token::new(self.slice(count), TokenKind::identifier)
    }

    fn get_single(&self, kind: TokenKind) -> Token {
        Token::new(self.slice(1), kind)
    }

    fn get_token(&self) -> Result<Option<Token>> {
        let Some(&current) = self.characters.get(self.index) else {
            return Ok(None);
        };

        let token = if current == '-' && self.expects_value() {
            match self.characters.get(self.index + 1) {
                Some(&next) if starts_negation(next) => self.get_single(TokenKind::prefix),
                _ => self.get_number(),
            }
        } else if current.is_ascii_digit() {
            self.get_number()
        } else if current.is_alphabetic() {
            self.get_identifier()
        } else if is_operator(current) {
            self.get_single(TokenKind::operator)
        } else if is_punctuation(current) {
            self.get_single(TokenKind::punctuation)
        } else {
            return Err(CalcError::invalid_character(current));
        };
        Ok(Some(token))
    }
}

impl Scanner for StringScanner {
    fn get_current(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    fn advance(&mut self) -> Result<()> {
        let token = self.get_token()?;
        if let Some(token) = &token {
            trace!("scanned {:?} '{}'", token.kind, token.content);
            self.index += token.content.chars().count();
        }
        self.token = token;
        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.token.is_some()
    }
}
