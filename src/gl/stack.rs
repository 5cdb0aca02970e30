use crate::mat4::Mat4;

/// A growable stack of matrices whose last entry is the current one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatrixStack {
    stack: Vec<Mat4>,
}

impl MatrixStack {
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Stack holding a single identity matrix.
    pub fn seeded() -> Self {
        Self {
            stack: vec![Mat4::identity()],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, m: Mat4) {
        self.stack.push(m);
    }

    pub fn pop(&mut self) -> Option<Mat4> {
        self.stack.pop()
    }

    #[inline]
    pub fn top(&self) -> Option<&Mat4> {
        self.stack.last()
    }

    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut Mat4> {
        self.stack.last_mut()
    }

    /// Current top, pushing an identity first if the stack is empty.
    pub fn top_mut_or_seed(&mut self) -> &mut Mat4 {
        if self.stack.is_empty() {
            self.stack.push(Mat4::identity());
        }
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    /// Drops every entry and the backing storage.
    pub fn release(&mut self) {
        self.stack = Vec::new();
    }
}
