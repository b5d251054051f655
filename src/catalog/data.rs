use super::{Category, MenuItem};

// ============================================================================
// Fiorente Menu Data
// ============================================================================
//
// Prices are in Argentine Pesos (ARS), integer units.
//
// ============================================================================

pub(super) fn categories() -> Vec<Category> {
    [
        ("pizzas", "Pizzas", "🍕"),
        ("empanadas", "Empanadas", "🥟"),
        ("picadas", "Picadas", "🧀"),
        ("sandwiches", "Sandwiches", "🥪"),
        ("cafeteria", "Cafetería", "☕"),
        ("bebidas", "Bebidas", "🥤"),
        ("cervezas", "Cervezas", "🍺"),
        ("tragos", "Tragos", "🍹"),
        ("postres", "Postres", "🍰"),
    ]
    .into_iter()
    .map(|(id, name, icon)| Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

fn item(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    category: &str,
    image: &str,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        image: format!("/images/{image}.jpg"),
        featured: false,
        available: true,
    }
}

fn featured(mut menu_item: MenuItem) -> MenuItem {
    menu_item.featured = true;
    menu_item
}

pub(super) fn menu_items() -> Vec<MenuItem> {
    vec![
        // Pizzas
        featured(item(
            "pizza-1",
            "Pizza Muzzarella",
            "Salsa de tomate, muzzarella y aceitunas",
            8500,
            "pizzas",
            "pizza-muzzarella",
        )),
        featured(item(
            "pizza-2",
            "Pizza Napolitana",
            "Salsa de tomate, muzzarella, tomate fresco y ajo",
            9500,
            "pizzas",
            "pizza-napolitana",
        )),
        item(
            "pizza-3",
            "Pizza Fugazzeta",
            "Abundante cebolla y muzzarella",
            9000,
            "pizzas",
            "pizza-fugazzeta",
        ),
        featured(item(
            "pizza-4",
            "Pizza Calabresa",
            "Salsa de tomate, muzzarella y rodajas de calabresa",
            10000,
            "pizzas",
            "pizza-calabresa",
        )),
        item(
            "pizza-5",
            "Pizza Jamón y Morrones",
            "Salsa de tomate, muzzarella, jamón cocido y morrones",
            10500,
            "pizzas",
            "pizza-jamon-morrones",
        ),
        featured(item(
            "pizza-6",
            "Pizza Especial Fiorente",
            "Nuestra especialidad con ingredientes premium",
            12000,
            "pizzas",
            "pizza-especial",
        )),
        // Empanadas
        item(
            "empanada-1",
            "Empanada de Carne",
            "Carne cortada a cuchillo con especias",
            1200,
            "empanadas",
            "empanada-carne",
        ),
        item(
            "empanada-2",
            "Empanada de Jamón y Queso",
            "Jamón cocido y queso cremoso",
            1200,
            "empanadas",
            "empanada-jamon-queso",
        ),
        item(
            "empanada-3",
            "Empanada de Pollo",
            "Pollo desmenuzado con cebolla y morrón",
            1200,
            "empanadas",
            "empanada-pollo",
        ),
        item(
            "empanada-4",
            "Empanada de Humita",
            "Choclo cremoso con especias",
            1200,
            "empanadas",
            "empanada-humita",
        ),
        item(
            "empanada-5",
            "Empanada Caprese",
            "Tomate, muzzarella y albahaca",
            1300,
            "empanadas",
            "empanada-caprese",
        ),
        // Picadas
        item(
            "picada-1",
            "Picada para 2",
            "Selección de fiambres, quesos, aceitunas y grisines",
            8000,
            "picadas",
            "picada-2",
        ),
        featured(item(
            "picada-2",
            "Picada para 4",
            "Variedad completa de fiambres, quesos y acompañamientos",
            14000,
            "picadas",
            "picada-4",
        )),
        item(
            "picada-3",
            "Picada Premium",
            "Selección gourmet con fiambres y quesos premium",
            18000,
            "picadas",
            "picada-premium",
        ),
        // Sandwiches
        item(
            "sandwich-1",
            "Sandwich de Milanesa",
            "Milanesa de carne con lechuga, tomate y mayonesa",
            5500,
            "sandwiches",
            "sandwich-milanesa",
        ),
        featured(item(
            "sandwich-2",
            "Sandwich de Lomo",
            "Lomo a la plancha con huevo, jamón y queso",
            7000,
            "sandwiches",
            "sandwich-lomo",
        )),
        item(
            "sandwich-3",
            "Sandwich Vegetariano",
            "Vegetales grillados con queso y pesto",
            4500,
            "sandwiches",
            "sandwich-vegetariano",
        ),
        // Cafetería
        item(
            "cafe-1",
            "Café Espresso",
            "Café espresso simple",
            1500,
            "cafeteria",
            "cafe-espresso",
        ),
        item(
            "cafe-2",
            "Café con Leche",
            "Café con leche cremosa",
            2000,
            "cafeteria",
            "cafe-con-leche",
        ),
        item(
            "cafe-3",
            "Cappuccino",
            "Espresso con leche espumada y cacao",
            2500,
            "cafeteria",
            "cappuccino",
        ),
        item(
            "cafe-4",
            "Submarino",
            "Leche caliente con barra de chocolate",
            2800,
            "cafeteria",
            "submarino",
        ),
        item(
            "cafe-5",
            "Medialunas (x3)",
            "Medialunas de manteca recién horneadas",
            2000,
            "cafeteria",
            "medialunas",
        ),
        // Bebidas
        item(
            "bebida-1",
            "Agua Mineral 500ml",
            "Agua mineral con o sin gas",
            1200,
            "bebidas",
            "agua",
        ),
        item(
            "bebida-2",
            "Coca-Cola 500ml",
            "Gaseosa línea Coca-Cola",
            1800,
            "bebidas",
            "coca-cola",
        ),
        item(
            "bebida-3",
            "Jugo Natural",
            "Jugo de naranja o pomelo exprimido",
            2500,
            "bebidas",
            "jugo-natural",
        ),
        item(
            "bebida-4",
            "Limonada",
            "Limonada casera con menta",
            2200,
            "bebidas",
            "limonada",
        ),
        // Cervezas
        item(
            "cerveza-1",
            "Cerveza Quilmes 500ml",
            "Cerveza rubia tradicional",
            2500,
            "cervezas",
            "cerveza-quilmes",
        ),
        item(
            "cerveza-2",
            "Cerveza Stella Artois 500ml",
            "Cerveza lager premium",
            3000,
            "cervezas",
            "cerveza-stella",
        ),
        item(
            "cerveza-3",
            "Cerveza Patagonia 500ml",
            "Cerveza artesanal argentina",
            3500,
            "cervezas",
            "cerveza-patagonia",
        ),
        featured(item(
            "cerveza-4",
            "Pinta de Cerveza Tirada",
            "Cerveza tirada del día",
            2800,
            "cervezas",
            "cerveza-tirada",
        )),
        // Tragos
        item(
            "trago-1",
            "Fernet con Coca",
            "Clásico argentino con Coca-Cola",
            4000,
            "tragos",
            "fernet",
        ),
        featured(item(
            "trago-2",
            "Mojito",
            "Ron, menta, lima y soda",
            5000,
            "tragos",
            "mojito",
        )),
        item(
            "trago-3",
            "Aperol Spritz",
            "Aperol, prosecco y soda",
            5500,
            "tragos",
            "aperol-spritz",
        ),
        item(
            "trago-4",
            "Gin Tonic",
            "Gin premium con tónica y botánicos",
            5500,
            "tragos",
            "gin-tonic",
        ),
        item(
            "trago-5",
            "Caipirinha",
            "Cachaça, lima y azúcar",
            4500,
            "tragos",
            "caipirinha",
        ),
        // Postres
        item(
            "postre-1",
            "Flan con Dulce de Leche",
            "Flan casero con dulce de leche y crema",
            3500,
            "postres",
            "flan",
        ),
        featured(item(
            "postre-2",
            "Tiramisú",
            "Clásico italiano con mascarpone y café",
            4000,
            "postres",
            "tiramisu",
        )),
        item(
            "postre-3",
            "Brownie con Helado",
            "Brownie de chocolate con helado de crema",
            4500,
            "postres",
            "brownie",
        ),
    ]
}
