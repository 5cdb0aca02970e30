mod support;

use std::thread;

use approx::assert_relative_eq;
use gfxmath::{
    Mat4, Real, Vec3,
    gl::{self, Channel, ContextRegistry, StackContext},
};
use support::{dense_matrix, unique_handle};

#[test]
fn push_translate_pop_scenario() {
    gl::set_current_context(unique_handle());
    gl::matrix_mode(Channel::ModelView);
    gl::push_matrix();
    gl::translate(1.0, 0.0, 0.0);
    assert_eq!(gl::get_matrix(Channel::ModelView), Mat4::from_translation(1.0, 0.0, 0.0));
    gl::pop_matrix();
    assert!(gl::get_matrix(Channel::ModelView).is_identity());
    gl::clear_current_context();
}

#[test]
fn push_then_pop_restores_prior_top_exactly() {
    gl::set_current_context(unique_handle());
    gl::matrix_mode(Channel::Projection);
    gl::load_matrix(&dense_matrix());
    let before = gl::get_matrix(Channel::Projection);

    gl::push_matrix();
    assert_eq!(gl::get_matrix(Channel::Projection), before);
    gl::rotate(33.0, 1.0, 1.0, 0.0);
    gl::scale(2.0, 3.0, 4.0);
    gl::pop_matrix();

    assert_eq!(gl::get_matrix(Channel::Projection), before);
    gl::clear_current_context();
}

#[test]
fn load_identity_resets_top() {
    gl::set_current_context(unique_handle());
    gl::matrix_mode(Channel::Texture);
    gl::load_matrix(&dense_matrix());
    gl::load_identity();
    assert!(gl::get_matrix(Channel::Texture).is_identity());
    gl::clear_current_context();
}

#[test]
fn mult_matrix_post_multiplies() {
    gl::set_current_context(unique_handle());
    gl::matrix_mode(Channel::ModelView);
    gl::translate(0.0, 0.0, -5.0);
    gl::scale(2.0, 2.0, 2.0);
    let expected = Mat4::from_translation(0.0, 0.0, -5.0) * Mat4::from_scaling(2.0, 2.0, 2.0);
    assert_eq!(gl::get_matrix(Channel::ModelView), expected);

    // scale applies first, then the translation
    let p = Vec3::new(1.0, 0.0, 0.0).transform(&gl::get_matrix(Channel::ModelView));
    assert_eq!(p, Vec3::new(2.0, 0.0, -5.0));
    gl::clear_current_context();
}

#[test]
fn rotate_takes_degrees() {
    gl::set_current_context(unique_handle());
    gl::rotate(90.0, 0.0, 0.0, 1.0);
    let p = Vec3::POS_X.transform(&gl::get_matrix(Channel::ModelView));
    assert_relative_eq!(p, Vec3::POS_Y, epsilon = 1e-6);
    gl::clear_current_context();
}

#[test]
fn get_matrix_reads_any_channel() {
    gl::set_current_context(unique_handle());
    gl::matrix_mode(Channel::Projection);
    gl::scale(3.0, 3.0, 3.0);
    gl::matrix_mode(Channel::ModelView);
    assert_eq!(gl::get_matrix(Channel::Projection), Mat4::from_scaling(3.0, 3.0, 3.0));
    assert!(gl::get_matrix(Channel::ModelView).is_identity());
    gl::clear_current_context();
}

#[test]
fn two_handles_keep_independent_stacks() {
    let a = unique_handle();
    let b = unique_handle();

    gl::set_current_context(a);
    gl::translate(1.0, 2.0, 3.0);

    gl::set_current_context(b);
    assert!(gl::get_matrix(Channel::ModelView).is_identity());
    gl::scale(5.0, 5.0, 5.0);

    gl::set_current_context(a);
    assert_eq!(gl::get_matrix(Channel::ModelView), Mat4::from_translation(1.0, 2.0, 3.0));
    assert_eq!(gl::current_context(), Some(a));

    gl::clear_context(b);
    gl::clear_current_context();
    assert_eq!(gl::current_context(), None);
}

#[test]
fn bindings_are_per_thread() {
    let handles: Vec<_> = (0..4).map(|_| unique_handle()).collect();
    let workers: Vec<_> = handles
        .iter()
        .enumerate()
        .map(|(i, &handle)| {
            thread::spawn(move || {
                gl::set_current_context(handle);
                for _ in 0..100 {
                    gl::push_matrix();
                    gl::translate(i as Real, 0.0, 0.0);
                    gl::pop_matrix();
                }
                gl::translate(i as Real, 0.0, 0.0);
                assert_eq!(gl::current_context(), Some(handle));
                gl::get_matrix(Channel::ModelView)
            })
        })
        .collect();

    for (i, worker) in workers.into_iter().enumerate() {
        let top = worker.join().expect("worker thread panicked");
        assert_eq!(top, Mat4::from_translation(i as Real, 0.0, 0.0));
    }

    // the spawning thread never bound anything
    assert_eq!(gl::current_context(), None);
    for handle in handles {
        gl::clear_context(handle);
        assert!(!ContextRegistry::global().contains(handle));
    }
}

#[test]
fn clearing_a_context_unbinds_threads_using_it() {
    let handle = unique_handle();
    gl::set_current_context(handle);
    gl::push_matrix();

    thread::spawn(move || gl::clear_context(handle))
        .join()
        .expect("clearing thread panicked");

    assert_eq!(gl::current_context(), None);

    // binding again gets a fresh, uninitialized context
    gl::set_current_context(handle);
    assert!(gl::get_matrix(Channel::ModelView).is_identity());
    gl::clear_current_context();
}

#[test]
#[should_panic(expected = "no matrix context is bound")]
fn operations_without_binding_panic() {
    gl::push_matrix();
}

#[test]
#[should_panic(expected = "no matrix context is bound")]
fn operations_after_clear_panic() {
    gl::set_current_context(unique_handle());
    gl::clear_current_context();
    gl::load_identity();
}

#[test]
#[should_panic(expected = "never initialized")]
fn pop_on_fresh_context_panics() {
    gl::set_current_context(unique_handle());
    gl::pop_matrix();
}

#[test]
#[should_panic(expected = "bottom entry")]
fn pop_past_seed_panics() {
    gl::set_current_context(unique_handle());
    gl::push_matrix();
    gl::pop_matrix();
    gl::pop_matrix();
}

#[test]
fn explicit_context_needs_no_binding() {
    let mut ctx = StackContext::new();
    ctx.matrix_mode(Channel::ModelView);
    ctx.push_matrix();
    ctx.mult_matrix(&dense_matrix());
    assert_eq!(ctx.depth(Channel::ModelView), 2);
    ctx.pop_matrix();
    assert!(ctx.get_matrix(Channel::ModelView).is_identity());
    assert_eq!(gl::current_context(), None);
}

#[test]
fn numeric_matrix_modes() {
    gl::set_current_context(unique_handle());
    let mode = Channel::try_from(0x1701_u32).expect("projection mode code");
    gl::matrix_mode(mode);
    gl::translate(0.0, 1.0, 0.0);
    assert_eq!(gl::get_matrix(Channel::Projection), Mat4::from_translation(0.0, 1.0, 0.0));
    assert!(Channel::try_from(0x1234_u32).is_err());
    gl::clear_current_context();
}
