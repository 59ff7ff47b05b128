//! Demonstrates both backends agreeing on the FIPS 197 Appendix C vector.

use dual_aes::{ni, soft};

fn main() {
    let key: [u8; 16] = core::array::from_fn(|i| i as u8);
    let plaintext: [u8; 16] = core::array::from_fn(|i| (i * 0x11) as u8);

    let aes = soft::Aes128::new(&key);
    let ciphertext = aes.encrypt(&plaintext);
    assert_eq!(aes.decrypt(&ciphertext), plaintext);

    println!("key:        {}", hex::encode(key));
    println!("plaintext:  {}", hex::encode(plaintext));
    println!("ciphertext: {}", hex::encode(ciphertext));

    if ni::is_available() {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            let accel = ni::Aes128::new(&key);
            assert_eq!(accel.encrypt(&plaintext), ciphertext);
            assert_eq!(accel.decrypt(&ciphertext), plaintext);
            println!("aes-ni backend agrees with the software backend");
        }
    } else {
        println!("aes-ni backend unavailable on this CPU");
    }
}
