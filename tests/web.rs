//! Browser smoke test: `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use clockfall_engine::ClockWorld;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn measures_glyphs_through_js() {
    clockfall_engine::init();
    let mut world = ClockWorld::new(None).expect("default config");
    let measure = js_sys::Function::new_with_args("ch, size", "return [size * 0.5, size];");
    world.reset(&measure).expect("measure callback returns pairs");
    assert_eq!(world.letter_count(), 18);

    world.frame();
    assert_eq!(world.frame_count(), 1);
}

#[wasm_bindgen_test]
fn bad_measure_result_is_an_error() {
    let mut world = ClockWorld::new(None).expect("default config");
    let measure = js_sys::Function::new_with_args("ch, size", "return 'wide';");
    assert!(world.reset(&measure).is_err());
}

#[wasm_bindgen_test]
fn bad_config_is_an_error() {
    let result = ClockWorld::new(Some("{\"physics\":{\"sub_steps\":0}}".to_string()));
    assert!(result.is_err());
}
