#[cfg(test)]
pub mod tests {
    use std::{fs::File, io::BufReader};

    use csv::Reader;

    #[derive(Clone)]
    pub struct Bio {
        pub handle: String,
        pub bio: String,
    }

    pub fn read_bios(bio_file_name: &str) -> Vec<Bio> {
        let file_path = format!("data/{}", bio_file_name);
        let file = File::open(file_path).unwrap();
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        csv_reader
            .records()
            .map(|r| r.unwrap())
            .map(|r| {
                let handle = r.get(0).unwrap().to_string();
                let bio = r.get(1).unwrap().to_string();
                Bio { handle, bio }
            })
            .collect()
    }

    #[test]
    #[should_panic(expected = "No such file or directory")]
    fn it_should_panic_if_the_file_does_not_exist() {
        read_bios("non_existent_file.csv");
    }

    #[test]
    fn it_should_read_bios_from_a_csv_file() {
        let bios = read_bios("bios_en.csv");
        assert_eq!(bios.len(), 12);
        assert_eq!(bios[0].handle, "@coffee_carl");
    }
}
