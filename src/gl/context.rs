use crate::errors::MathError;
use crate::float_types::Real;
use crate::gl::stack::MatrixStack;
use crate::mat4::Mat4;
use crate::utility::degrees_to_radians;
use crate::vec3::Vec3;

/// Which of the three matrix stacks an operation targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channel {
    #[default]
    ModelView = 0x1700,
    Projection = 0x1701,
    Texture = 0x1702,
}

impl TryFrom<u32> for Channel {
    type Error = MathError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0x1700 => Ok(Channel::ModelView),
            0x1701 => Ok(Channel::Projection),
            0x1702 => Ok(Channel::Texture),
            other => Err(MathError::InvalidMatrixMode(other)),
        }
    }
}

impl From<Channel> for u32 {
    fn from(channel: Channel) -> u32 {
        channel as u32
    }
}

/// Three matrix stacks plus the channel that operations currently target.
///
/// The stacks start empty and are each seeded with one identity matrix by
/// the first operation that needs them. [`StackContext::pop_matrix`] never
/// seeds: popping a context nobody has touched is a caller bug.
#[derive(Clone, Debug, Default)]
pub struct StackContext {
    modelview: MatrixStack,
    projection: MatrixStack,
    texture: MatrixStack,
    current: Channel,
    initialized: bool,
}

impl StackContext {
    pub const fn new() -> Self {
        Self {
            modelview: MatrixStack::new(),
            projection: MatrixStack::new(),
            texture: MatrixStack::new(),
            current: Channel::ModelView,
            initialized: false,
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn current_channel(&self) -> Channel {
        self.current
    }

    /// Number of entries on a channel's stack, seed included.
    pub fn depth(&self, channel: Channel) -> usize {
        self.stack(channel).len()
    }

    fn lazy_initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.modelview = MatrixStack::seeded();
        self.projection = MatrixStack::seeded();
        self.texture = MatrixStack::seeded();
        self.current = Channel::ModelView;
        self.initialized = true;
    }

    fn stack(&self, channel: Channel) -> &MatrixStack {
        match channel {
            Channel::ModelView => &self.modelview,
            Channel::Projection => &self.projection,
            Channel::Texture => &self.texture,
        }
    }

    fn stack_mut(&mut self, channel: Channel) -> &mut MatrixStack {
        match channel {
            Channel::ModelView => &mut self.modelview,
            Channel::Projection => &mut self.projection,
            Channel::Texture => &mut self.texture,
        }
    }

    /// Top of the current stack, seeding the stacks first if needed.
    fn top_mut(&mut self) -> &mut Mat4 {
        self.lazy_initialize();
        let channel = self.current;
        self.stack_mut(channel).top_mut_or_seed()
    }

    pub fn matrix_mode(&mut self, channel: Channel) {
        self.lazy_initialize();
        self.current = channel;
    }

    /// Duplicates the current top.
    pub fn push_matrix(&mut self) {
        let top = *self.top_mut();
        let channel = self.current;
        self.stack_mut(channel).push(top);
        log::trace!("push {:?}: depth {}", channel, self.depth(channel));
    }

    /// # Panics
    /// If the context was never initialized, or if only the seeded entry is left.
    pub fn pop_matrix(&mut self) {
        assert!(self.initialized, "cannot pop a matrix stack that was never initialized");
        let channel = self.current;
        let stack = self.stack_mut(channel);
        assert!(
            stack.len() > 1,
            "cannot pop the bottom entry of the {channel:?} matrix stack"
        );
        stack.pop();
        log::trace!("pop {:?}: depth {}", channel, self.depth(channel));
    }

    pub fn load_identity(&mut self) {
        *self.top_mut() = Mat4::identity();
    }

    pub fn load_matrix(&mut self, m: &Mat4) {
        *self.top_mut() = *m;
    }

    /// `top = top * m`
    pub fn mult_matrix(&mut self, m: &Mat4) {
        let top = self.top_mut();
        *top = Mat4::multiply(top, m);
    }

    pub fn translate(&mut self, x: Real, y: Real, z: Real) {
        self.mult_matrix(&Mat4::from_translation(x, y, z));
    }

    /// Rotation of `angle` **degrees** about the axis (x, y, z).
    pub fn rotate(&mut self, angle: Real, x: Real, y: Real, z: Real) {
        let rotation = Mat4::from_axis_angle(Vec3::new(x, y, z), degrees_to_radians(angle));
        self.mult_matrix(&rotation);
    }

    pub fn scale(&mut self, x: Real, y: Real, z: Real) {
        self.mult_matrix(&Mat4::from_scaling(x, y, z));
    }

    /// Top of `channel`'s stack, whichever channel is current.
    pub fn get_matrix(&mut self, channel: Channel) -> Mat4 {
        self.lazy_initialize();
        self.stack(channel).top().copied().unwrap_or_else(Mat4::identity)
    }

    /// Frees every stack and returns to the uninitialized state.
    pub fn release(&mut self) {
        self.modelview.release();
        self.projection.release();
        self.texture.release();
        self.current = Channel::ModelView;
        self.initialized = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_codes() {
        assert_eq!(Channel::try_from(0x1701_u32), Ok(Channel::Projection));
        assert_eq!(u32::from(Channel::Texture), 0x1702);
        assert_eq!(
            Channel::try_from(0x1703_u32),
            Err(MathError::InvalidMatrixMode(0x1703))
        );
    }

    #[test]
    fn first_use_seeds_identity() {
        let mut ctx = StackContext::new();
        assert!(!ctx.is_initialized());
        assert!(ctx.get_matrix(Channel::Texture).is_identity());
        assert!(ctx.is_initialized());
        assert_eq!(ctx.depth(Channel::ModelView), 1);
    }

    #[test]
    fn channels_are_independent() {
        let mut ctx = StackContext::new();
        ctx.matrix_mode(Channel::Projection);
        ctx.scale(2.0, 2.0, 2.0);
        ctx.matrix_mode(Channel::ModelView);
        assert!(ctx.get_matrix(Channel::ModelView).is_identity());
        assert_eq!(
            ctx.get_matrix(Channel::Projection),
            Mat4::from_scaling(2.0, 2.0, 2.0)
        );
    }

    #[test]
    #[should_panic(expected = "never initialized")]
    fn pop_before_use_panics() {
        StackContext::new().pop_matrix();
    }

    #[test]
    #[should_panic(expected = "bottom entry")]
    fn pop_of_seed_panics() {
        let mut ctx = StackContext::new();
        ctx.load_identity();
        ctx.pop_matrix();
    }

    #[test]
    fn release_returns_to_uninitialized() {
        let mut ctx = StackContext::new();
        ctx.matrix_mode(Channel::Texture);
        ctx.push_matrix();
        ctx.release();
        assert!(!ctx.is_initialized());
        assert_eq!(ctx.depth(Channel::Texture), 0);
        assert_eq!(ctx.current_channel(), Channel::ModelView);
    }
}
