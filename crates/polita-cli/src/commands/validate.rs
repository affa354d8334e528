use polita_core::error::PolitaError;
use polita_core::validate;

pub fn run(
    plate: Option<String>,
    vin: Option<String>,
    phone: Option<String>,
) -> Result<(), PolitaError> {
    if plate.is_none() && vin.is_none() && phone.is_none() {
        eprintln!("Error: nothing to validate, pass --plate, --vin or --phone");
        std::process::exit(2);
    }

    let mut failures = 0;
    if let Some(value) = plate {
        report("plate", &value, validate::validate_plate(&value), &mut failures);
    }
    if let Some(value) = vin {
        report("vin", &value, validate::validate_vin(&value), &mut failures);
    }
    if let Some(value) = phone {
        report("phone", &value, validate::validate_phone(&value), &mut failures);
    }

    if failures > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn report(field: &str, value: &str, result: Result<(), PolitaError>, failures: &mut usize) {
    match result {
        Ok(()) => println!("{field}: {value} ok"),
        Err(e) => {
            println!("{field}: {value} INVALID ({e})");
            *failures += 1;
        }
    }
}
