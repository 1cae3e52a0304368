use crate::tree::Space;

/// An element together with the formatting that follows it.
///
/// In lists, `after` holds everything up to the next element (including a
/// comma or `|`/`&` separator) or, for the last element, up to the closing
/// delimiter.
#[derive(Clone, Debug)]
pub struct RightPadded<T> {
    pub element: T,
    pub after: Space,
}

impl<T> RightPadded<T> {
    pub fn new(element: T, after: Space) -> Self {
        Self { element, after }
    }

    pub fn with_element(self, element: T) -> Self {
        Self { element, ..self }
    }

    pub fn with_after(self, after: Space) -> Self {
        Self { after, ..self }
    }
}

/// An element preceded by fixed punctuation, with the space before that
/// punctuation.
///
/// Used for the `:` before a type or value, the `=` before a default value
/// and the `@` of a directive definition's name. The punctuation itself is
/// implied by the position.
#[derive(Clone, Debug)]
pub struct LeftPadded<T> {
    pub before: Space,
    pub element: T,
}

impl<T> LeftPadded<T> {
    pub fn new(before: Space, element: T) -> Self {
        Self { before, element }
    }

    pub fn with_element(self, element: T) -> Self {
        Self { element, ..self }
    }

    pub fn with_before(self, before: Space) -> Self {
        Self { before, ..self }
    }
}

/// A delimited or keyword-introduced list.
///
/// `before` is the space before the opening delimiter (or the introducing
/// keyword). Separators and the space before the closing delimiter live in
/// the elements' `after` paddings.
#[derive(Clone, Debug)]
pub struct Container<T> {
    pub before: Space,
    pub elements: Vec<RightPadded<T>>,
}

impl<T> Container<T> {
    pub fn new(before: Space, elements: Vec<RightPadded<T>>) -> Self {
        Self { before, elements }
    }

    pub fn with_elements(self, elements: Vec<RightPadded<T>>) -> Self {
        Self { elements, ..self }
    }

    /// The unpadded elements, in source order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter().map(|padded| &padded.element)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}
