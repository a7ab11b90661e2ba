//! The storefront's static product list.

use std::collections::BTreeMap;

use deckstore_core::Money;

use crate::product::{BoardType, Dimensions, Product, ProductId, SpecValue};

struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    short_description: &'static str,
    price: u64,
    price_per_square_meter: u64,
    images: &'static [&'static str],
    dimensions: (u32, u32, u32),
    color: &'static str,
    board_type: BoardType,
    purpose: &'static [&'static str],
    is_popular: bool,
    is_new: bool,
    specifications: &'static [(&'static str, &'static str)],
}

impl Seed {
    fn into_product(self) -> Product {
        let (width, length, thickness) = self.dimensions;
        Product {
            id: ProductId::from_static(self.id),
            name: self.name.to_string(),
            description: self.description.to_string(),
            short_description: self.short_description.to_string(),
            price: Money(self.price),
            price_per_square_meter: Money(self.price_per_square_meter),
            images: self.images.iter().map(|s| s.to_string()).collect(),
            dimensions: Dimensions { width, length, thickness },
            color: self.color.to_string(),
            board_type: self.board_type,
            purpose: self.purpose.iter().map(|s| s.to_string()).collect(),
            in_stock: true,
            is_popular: self.is_popular,
            is_new: self.is_new,
            specifications: self
                .specifications
                .iter()
                .map(|(k, v)| (k.to_string(), SpecValue::from(*v)))
                .collect::<BTreeMap<_, _>>(),
        }
    }
}

/// The six boards sold by the store, in catalog order.
pub fn seed_products() -> Vec<Product> {
    SEEDS.into_iter().map(Seed::into_product).collect()
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: "deck-001",
        name: "Классическая террасная доска",
        description: "Классическая террасная доска из композитного материала, устойчивая к влаге и ультрафиолету. Идеальна для открытых террас, веранд и садовых дорожек. Не скользит, не трескается, не требует особого ухода. Гарантия 25 лет.",
        short_description: "Классическая террасная доска для террас и веранд",
        price: 1200,
        price_per_square_meter: 2400,
        images: &[
            "https://do.kg/oc-content/uploads/1/132.jpg",
            "https://deckson.ru/wp-content/uploads/2021/10/shirina-doski-dpk.jpg",
        ],
        dimensions: (140, 3000, 25),
        color: "Орех",
        board_type: BoardType::Hollow,
        purpose: &["Терраса", "Веранда", "Садовая дорожка"],
        is_popular: true,
        is_new: false,
        specifications: &[
            ("material", "Древесно-полимерный композит"),
            ("warranty", "25 лет"),
            ("loadCapacity", "350 кг/м²"),
            ("waterResistance", "Высокая"),
            ("uvResistance", "Высокая"),
            ("maintenanceRequired", "Минимальное"),
        ],
    },
    Seed {
        id: "deck-002",
        name: "Премиум террасная доска",
        description: "Премиальная террасная доска повышенной прочности с текстурой натурального дерева. Подходит для зон с интенсивной нагрузкой: бассейны, коммерческие террасы, причалы. Высокая устойчивость к влаге, солнцу и перепадам температур. Гарантия 30 лет.",
        short_description: "Премиальная доска для зон с высокой нагрузкой",
        price: 1800,
        price_per_square_meter: 3600,
        images: &[
            "https://deckson.ru/wp-content/uploads/2023/04/nw-premium-multicolor-brown.jpg",
            "https://alfakrov.com/upload/iblock/057/h2n4ncfgw9x4nkj0anj0txgqipkf5oo7.png",
        ],
        dimensions: (150, 4000, 30),
        color: "Венге",
        board_type: BoardType::Solid,
        purpose: &["Бассейн", "Коммерческая терраса", "Причал"],
        is_popular: true,
        is_new: false,
        specifications: &[
            ("material", "Древесно-полимерный композит премиум-класса"),
            ("warranty", "30 лет"),
            ("loadCapacity", "450 кг/м²"),
            ("waterResistance", "Очень высокая"),
            ("uvResistance", "Очень высокая"),
            ("maintenanceRequired", "Минимальное"),
        ],
    },
    Seed {
        id: "deck-003",
        name: "Эко террасная доска",
        description: "Экологичная террасная доска из переработанных материалов. Сочетает в себе заботу о природе и высокое качество. Подходит для любых наружных площадок. Легкая в монтаже, не выцветает, не гниет. Гарантия 20 лет.",
        short_description: "Экологичная доска из переработанных материалов",
        price: 1500,
        price_per_square_meter: 3000,
        images: &[
            "https://unionwood.ru/uploads/big/2897/2.jpg",
            "https://unionwood.ru/uploads/big/490/3.jpg",
        ],
        dimensions: (135, 3000, 25),
        color: "Тик",
        board_type: BoardType::Hollow,
        purpose: &["Терраса", "Патио", "Балкон"],
        is_popular: false,
        is_new: true,
        specifications: &[
            ("material", "Эко-композит (90% переработанных материалов)"),
            ("warranty", "20 лет"),
            ("loadCapacity", "320 кг/м²"),
            ("waterResistance", "Высокая"),
            ("uvResistance", "Высокая"),
            ("maintenanceRequired", "Минимальное"),
        ],
    },
    Seed {
        id: "deck-004",
        name: "Slim террасная доска",
        description: "Тонкая и легкая террасная доска для балконов, лоджий и небольших террас. Отличается малым весом и простотой монтажа. Не создает большой нагрузки на несущие конструкции. Устойчива к атмосферным воздействиям. Гарантия 15 лет.",
        short_description: "Легкая и тонкая доска для балконов и лоджий",
        price: 950,
        price_per_square_meter: 2100,
        images: &["https://petrozavodsk.ksk24.ru/upload/iblock/4a8/palisandr.jpg"],
        dimensions: (120, 2400, 20),
        color: "Серый",
        board_type: BoardType::Hollow,
        purpose: &["Балкон", "Лоджия", "Малая терраса"],
        is_popular: false,
        is_new: true,
        specifications: &[
            ("material", "Легкий древесно-полимерный композит"),
            ("warranty", "15 лет"),
            ("loadCapacity", "250 кг/м²"),
            ("waterResistance", "Средняя"),
            ("uvResistance", "Высокая"),
            ("maintenanceRequired", "Минимальное"),
        ],
    },
    Seed {
        id: "deck-005",
        name: "Террасная доска Winter",
        description: "Специальная террасная доска для регионов с суровым климатом. Устойчива к резким перепадам температур, снегу, льду. Имеет противоскользящее покрытие. Подходит для всесезонных террас, крылец, входных групп. Гарантия 25 лет.",
        short_description: "Доска для регионов с суровым климатом",
        price: 1700,
        price_per_square_meter: 3400,
        images: &["https://latitudo.ru/upload/iblock/624/rpsvb2d3h02bdgx13wl0gmchpn6txkov.jpg"],
        dimensions: (145, 3000, 28),
        color: "Графит",
        board_type: BoardType::Solid,
        purpose: &["Всесезонная терраса", "Крыльцо", "Входная группа"],
        is_popular: true,
        is_new: false,
        specifications: &[
            ("material", "Морозостойкий древесно-полимерный композит"),
            ("warranty", "25 лет"),
            ("loadCapacity", "400 кг/м²"),
            ("waterResistance", "Очень высокая"),
            ("uvResistance", "Высокая"),
            ("maintenanceRequired", "Минимальное"),
            ("temperatureRange", "от -50°C до +70°C"),
        ],
    },
    Seed {
        id: "deck-006",
        name: "Фактурная террасная доска",
        description: "Террасная доска с выраженной текстурой натурального дерева. Создает эффект массива древесины. Подходит для террас, беседок, зон отдыха. Высокая стойкость к выцветанию и механическим повреждениям. Гарантия 25 лет.",
        short_description: "Доска с выраженной текстурой натурального дерева",
        price: 1600,
        price_per_square_meter: 3200,
        images: &[
            "https://www.tophouse.ru/images/price/elementyi-ventilyatsii-doma/master-flesh-master-flash-uplotniteli-trub/916-big.jpg",
        ],
        dimensions: (140, 3000, 25),
        color: "Дуб",
        board_type: BoardType::Solid,
        purpose: &["Терраса", "Беседка", "Зона отдыха"],
        is_popular: true,
        is_new: false,
        specifications: &[
            ("material", "Древесно-полимерный композит с технологией DeepWood"),
            ("warranty", "25 лет"),
            ("loadCapacity", "380 кг/м²"),
            ("waterResistance", "Высокая"),
            ("uvResistance", "Очень высокая"),
            ("maintenanceRequired", "Минимальное"),
        ],
    },
];
