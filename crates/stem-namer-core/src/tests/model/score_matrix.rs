use crate::ScoreMatrix;

/// WHAT: Mean scores average each class over every frame
/// WHY: Classification decides on per-file means, not single frames
#[test]
fn given_two_frames_when_averaging_then_mean_per_class() {
    // Given: Two frames of three classes
    let matrix = ScoreMatrix::from_frames(&[vec![0.6, 0.2, 0.0], vec![0.2, 0.4, 1.0]]).unwrap();

    // When: Averaging
    let means = matrix.mean_scores();

    // Then: One mean per class
    assert_eq!(matrix.frames(), 2);
    assert_eq!(matrix.classes(), 3);
    let expected = [0.4, 0.3, 0.5];
    for (mean, want) in means.iter().zip(expected) {
        assert!((mean - want).abs() < 1e-6, "got {}, want {}", mean, want);
    }
}

/// WHAT: Ragged or empty data is rejected
/// WHY: A partial row would shift every later class index
#[test]
fn given_ragged_data_when_building_matrix_then_none() {
    assert!(ScoreMatrix::new(vec![0.1, 0.2, 0.3], 2).is_none());
    assert!(ScoreMatrix::new(Vec::new(), 2).is_none());
    assert!(ScoreMatrix::new(vec![0.1], 0).is_none());
    assert!(ScoreMatrix::from_frames(&[vec![0.1, 0.2], vec![0.3]]).is_none());
    assert!(ScoreMatrix::from_frames(&[]).is_none());
}
