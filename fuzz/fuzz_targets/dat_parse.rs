use honggfuzz::fuzz;
use weightgen::dat;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                if let Ok(matrix) = dat::parse(text) {
                    assert!(matrix.objectives() > 0);
                    assert!(matrix.rows().iter().all(|r| r.len() == matrix.objectives()));
                    let _ = matrix.check_simplex(1e-6);
                }
            }
        });
    }
}
