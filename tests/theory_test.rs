// Key signature and diatonic chord properties through the public API

use score_theory::{
    generate_diatonic_chords, resolve_key_signature, KeySignature, PitchClass, TheoryError,
};
use score_theory::theory::{diatonic_seventh_chords, major_scale};

#[test]
fn test_every_signature_in_range_resolves() {
    for accidentals in -7..=7 {
        assert!(resolve_key_signature(accidentals).is_ok());
    }
    for accidentals in (-20..-7).chain(8..20) {
        assert_eq!(
            resolve_key_signature(accidentals),
            Err(TheoryError::InvalidAccidentalCount(accidentals))
        );
    }
}

#[test]
fn test_reference_key_names() {
    assert_eq!(resolve_key_signature(0).unwrap(), "C");
    assert_eq!(resolve_key_signature(1).unwrap(), "G");
    assert_eq!(resolve_key_signature(-1).unwrap(), "F");
    assert_eq!(resolve_key_signature(7).unwrap(), "C♯");
    assert_eq!(resolve_key_signature(-7).unwrap(), "C♭");
}

#[test]
fn test_c_major_reference_chords() {
    let chords = generate_diatonic_chords("C").unwrap();
    assert_eq!(chords[0], "C Major 7th (C, E, G, B)");
    assert_eq!(chords[4], "G Dominant 7th (G, B, D, F)");
    assert_eq!(chords[6], "B Half-diminished (B, D, F, A)");
}

#[test]
fn test_descriptor_roots_are_the_scale() {
    for root in PitchClass::ALL {
        let chords = generate_diatonic_chords(root.as_str()).unwrap();
        assert_eq!(chords.len(), 7);

        let scale = major_scale(root);
        for (descriptor, note) in chords.iter().zip(scale.iter()) {
            let chord_root = descriptor.split(' ').next().unwrap();
            assert_eq!(chord_root, note.as_str());
        }
    }
}

#[test]
fn test_non_canonical_roots_rejected() {
    for root in ["H", "Cb", "Bb", "e", "Do", "C#m"] {
        assert_eq!(
            generate_diatonic_chords(root),
            Err(TheoryError::InvalidRootNote(root.to_string()))
        );
    }
}

#[test]
fn test_output_is_stable_across_calls() {
    for root in PitchClass::ALL {
        let first = generate_diatonic_chords(root.as_str()).unwrap();
        let second = generate_diatonic_chords(root.as_str()).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_scale_returns_to_root() {
    for root in PitchClass::ALL {
        let scale = major_scale(root);
        assert_eq!((scale[6].index() + 1) % 12, root.index());
    }
}

#[test]
fn test_every_key_signature_has_chords() {
    // tonic of each signature feeds straight into the chord generator
    for accidentals in -7..=7 {
        let key = KeySignature::new(accidentals).unwrap();
        let chords = diatonic_seventh_chords(key.major_tonic());
        assert_eq!(chords[0].root, key.major_tonic());
        assert_eq!(chords[4].root, key.major_tonic().transpose(7));
    }
}
